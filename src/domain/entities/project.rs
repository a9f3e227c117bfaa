use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Design,
    Backend,
    Fullstack,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::Web,
        ProjectCategory::Mobile,
        ProjectCategory::Design,
        ProjectCategory::Backend,
        ProjectCategory::Fullstack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Design => "design",
            ProjectCategory::Backend => "backend",
            ProjectCategory::Fullstack => "fullstack",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Invalid project category: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub featured: bool,
    pub category: ProjectCategory,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Case-insensitive substring match against any of the project's technologies.
    pub fn uses_technology(&self, technology: &str) -> bool {
        let needle = technology.to_lowercase();
        self.technologies
            .iter()
            .any(|tech| tech.to_lowercase().contains(&needle))
    }
}

/// Optional filters for the project listing. `None` means the field is not applied.
/// `category` is compared against the category's wire name, so an unknown name
/// matches no project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub technology: Option<String>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(category) = &self.category {
            if project.category.as_str() != category {
                return false;
            }
        }
        if let Some(featured) = self.featured {
            if project.featured != featured {
                return false;
            }
        }
        match &self.technology {
            Some(technology) => project.uses_technology(technology),
            None => true,
        }
    }
}

/// Raw `?category=&featured=&technology=` query, coerced into a [`ProjectFilter`].
#[derive(Debug, Default, Deserialize)]
pub struct ProjectFilterQuery {
    pub category: Option<String>,
    pub featured: Option<String>,
    pub technology: Option<String>,
}

impl TryFrom<ProjectFilterQuery> for ProjectFilter {
    type Error = String;

    fn try_from(query: ProjectFilterQuery) -> Result<Self, Self::Error> {
        let featured = non_empty(query.featured)
            .map(|raw| match raw.to_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(format!("featured must be true or false, got '{}'", raw)),
            })
            .transpose()?;

        Ok(ProjectFilter {
            category: non_empty(query.category),
            featured,
            technology: non_empty(query.technology),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn project(category: ProjectCategory, featured: bool, technologies: &[&str]) -> Project {
        Project {
            id: "1".into(),
            title: "Sample".into(),
            description: "Sample project".into(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            image_url: None,
            demo_url: None,
            github_url: None,
            featured,
            category,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn technology_match_is_case_insensitive_substring() {
        let p = project(ProjectCategory::Web, false, &["React Native", "Redux"]);
        assert!(p.uses_technology("react"));
        assert!(p.uses_technology("NATIVE"));
        assert!(!p.uses_technology("vue"));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let p = project(ProjectCategory::Mobile, true, &["Expo"]);
        assert!(ProjectFilter::default().matches(&p));
    }

    #[test]
    fn every_supplied_field_must_match() {
        let p = project(ProjectCategory::Fullstack, true, &["React", "Node.js"]);
        let filter = ProjectFilter {
            category: Some("fullstack".into()),
            featured: Some(true),
            technology: Some("node".into()),
        };
        assert!(filter.matches(&p));

        let wrong_featured = ProjectFilter { featured: Some(false), ..filter.clone() };
        assert!(!wrong_featured.matches(&p));

        let wrong_category = ProjectFilter { category: Some("web".into()), ..filter };
        assert!(!wrong_category.matches(&p));
    }

    #[test]
    fn query_treats_blank_values_as_absent() {
        let query = ProjectFilterQuery {
            category: Some("".into()),
            featured: Some("  ".into()),
            technology: Some("".into()),
        };
        assert_eq!(ProjectFilter::try_from(query).unwrap(), ProjectFilter::default());
    }

    #[test]
    fn query_coerces_featured_and_category() {
        let query = ProjectFilterQuery {
            category: Some("mobile".into()),
            featured: Some("TRUE".into()),
            technology: Some("Expo".into()),
        };
        let filter = ProjectFilter::try_from(query).unwrap();
        assert_eq!(filter.category.as_deref(), Some("mobile"));
        assert_eq!(filter.featured, Some(true));
        assert_eq!(filter.technology.as_deref(), Some("Expo"));
    }

    #[test]
    fn query_rejects_unknown_featured_value() {
        let bad_featured = ProjectFilterQuery { featured: Some("yes".into()), ..Default::default() };
        assert!(ProjectFilter::try_from(bad_featured).is_err());
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let query = ProjectFilterQuery { category: Some("games".into()), ..Default::default() };
        let filter = ProjectFilter::try_from(query).unwrap();

        for category in ProjectCategory::ALL {
            assert!(!filter.matches(&project(category, true, &["React"])));
        }
    }

    #[test]
    fn category_parses_from_wire_name() {
        assert_eq!("fullstack".parse::<ProjectCategory>(), Ok(ProjectCategory::Fullstack));
        assert!("Web".parse::<ProjectCategory>().is_err());
    }

    #[test]
    fn serializes_with_camel_case_and_omits_missing_links() {
        let mut p = project(ProjectCategory::Web, true, &["CSS3"]);
        p.github_url = Some("https://github.com/mary/x".into());

        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["githubUrl"], "https://github.com/mary/x");
        assert_eq!(json["category"], "web");
        assert!(json.get("demoUrl").is_none());
        assert!(json.get("createdAt").is_some());
    }
}

use crate::{
    client::ui::CounterAnimation,
    entities::{
        about_me::AboutInfo,
        portfolio::PortfolioOverview,
        project::Project,
        skill::Skill,
    },
};

pub const PLACEHOLDER_PROJECT_IMAGE: &str = "/images/placeholder-project.jpg";
pub const DEFAULT_SKILL_ICON: &str = "⚡";

/// Bar width, in percent, for a proficiency label.
pub fn proficiency_width(proficiency: &str) -> u8 {
    match proficiency {
        "beginner" => 25,
        "intermediate" => 50,
        "advanced" => 75,
        "expert" => 95,
        _ => 50,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioStats {
    pub total_projects: u64,
    pub years_experience: u64,
    pub skills_count: u64,
}

impl From<&PortfolioOverview> for PortfolioStats {
    fn from(overview: &PortfolioOverview) -> Self {
        PortfolioStats {
            total_projects: overview.total_projects as u64,
            years_experience: u64::from(overview.years_experience),
            skills_count: overview.skills_count as u64,
        }
    }
}

impl PortfolioStats {
    /// One count-up animation per stats element, keyed by element id.
    pub fn counters(&self) -> Vec<(&'static str, CounterAnimation)> {
        vec![
            ("total-projects", CounterAnimation::new(self.total_projects)),
            ("years-experience", CounterAnimation::new(self.years_experience)),
            ("skills-count", CounterAnimation::new(self.skills_count)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub id: String,
    pub category: String,
    pub image_url: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        ProjectCard {
            id: project.id.clone(),
            category: project.category.as_str().to_string(),
            image_url: project
                .image_url
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_PROJECT_IMAGE.to_string()),
            title: project.title.clone(),
            description: project.description.clone(),
            technologies: project.technologies.clone(),
            demo_url: project.demo_url.clone(),
            github_url: project.github_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCard {
    pub icon: String,
    pub name: String,
    pub width: u8,
}

impl From<&Skill> for SkillCard {
    fn from(skill: &Skill) -> Self {
        SkillCard {
            icon: skill
                .icon
                .clone()
                .unwrap_or_else(|| DEFAULT_SKILL_ICON.to_string()),
            name: skill.name.clone(),
            width: proficiency_width(skill.proficiency.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup {
    pub category: String,
    pub heading: String,
    pub skills: Vec<SkillCard>,
}

/// Groups skills by category, in order of each category's first appearance.
pub fn group_skills(skills: &[Skill]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for skill in skills {
        let category = skill.category.as_str();
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.skills.push(SkillCard::from(skill)),
            None => groups.push(SkillGroup {
                category: category.to_string(),
                heading: category.replacen('-', " ", 1),
                skills: vec![SkillCard::from(skill)],
            }),
        }
    }

    groups
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutView {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub location: String,
    pub email: String,
}

impl From<&AboutInfo> for AboutView {
    fn from(about: &AboutInfo) -> Self {
        AboutView {
            name: about.name.clone(),
            title: about.title.clone(),
            bio: about.bio.clone(),
            location: about.location.clone(),
            email: about.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::skill::{Proficiency, SkillCategory};
    use crate::store::seed;

    #[test]
    fn proficiency_width_mapping() {
        assert_eq!(proficiency_width("beginner"), 25);
        assert_eq!(proficiency_width("intermediate"), 50);
        assert_eq!(proficiency_width("advanced"), 75);
        assert_eq!(proficiency_width("expert"), 95);
        assert_eq!(proficiency_width("guru"), 50);
        assert_eq!(proficiency_width(""), 50);
        assert_eq!(proficiency_width("Expert"), 50);
    }

    #[test]
    fn project_card_falls_back_to_placeholder_image() {
        let mut project = seed::projects().remove(0);
        project.image_url = None;
        project.demo_url = None;

        let card = ProjectCard::from(&project);
        assert_eq!(card.image_url, PLACEHOLDER_PROJECT_IMAGE);
        assert_eq!(card.category, "fullstack");
        assert!(card.demo_url.is_none());
        assert!(card.github_url.is_some());
    }

    #[test]
    fn skills_group_in_first_appearance_order() {
        let groups = group_skills(&seed::skills());

        let categories: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["frontend", "backend", "tools", "design", "soft-skills"]);
        assert_eq!(groups[0].skills.len(), 4);
        assert_eq!(groups[4].heading, "soft skills");
        assert_eq!(groups[0].skills[0].width, 95);
    }

    #[test]
    fn interleaved_categories_merge_into_one_group() {
        let skill = |id: &str, category: SkillCategory| Skill {
            id: id.into(),
            name: format!("skill {id}"),
            category,
            proficiency: Proficiency::Beginner,
            icon: None,
        };
        let skills = vec![
            skill("1", SkillCategory::Tools),
            skill("2", SkillCategory::Design),
            skill("3", SkillCategory::Tools),
        ];

        let groups = group_skills(&skills);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].skills.len(), 2);
        assert_eq!(groups[0].skills[1].icon, DEFAULT_SKILL_ICON);
        assert_eq!(groups[0].skills[1].width, 25);
    }

    #[test]
    fn stats_expose_one_counter_per_element() {
        let stats = PortfolioStats { total_projects: 4, years_experience: 3, skills_count: 12 };
        let ids: Vec<&str> = stats.counters().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["total-projects", "years-experience", "skills-count"]);
    }
}

use serde::{Deserialize, Serialize};

use crate::entities::{about_me::AboutInfo, project::Project};

/// Landing-page summary: counts plus the most recent projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    pub total_projects: usize,
    pub featured_projects: usize,
    pub skills_count: usize,
    pub years_experience: u32,
    pub about_info: AboutInfo,
    pub recent_projects: Vec<Project>,
}

use std::cmp::Reverse;

use crate::{
    constants::{RECENT_PROJECTS_LIMIT, YEARS_EXPERIENCE},
    entities::{
        about_me::AboutInfo,
        contact_me::{ContactMessage, NewContactMessage},
        portfolio::PortfolioOverview,
        project::{Project, ProjectFilter},
        skill::Skill,
    },
    errors::AppError,
    repositories::portfolio::PortfolioRepository,
};

pub struct PortfolioHandler<R>
where
    R: PortfolioRepository,
{
    pub portfolio_repo: R,
}

impl<R> PortfolioHandler<R>
where
    R: PortfolioRepository,
{
    pub fn new(portfolio_repo: R) -> Self {
        PortfolioHandler { portfolio_repo }
    }

    /// Lists projects matching every supplied filter field, newest first
    pub async fn get_all_projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>, AppError> {
        let mut projects: Vec<Project> = self.portfolio_repo
            .list_projects()
            .await?
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect();

        projects.sort_by_key(|p| Reverse(p.created_at));
        Ok(projects)
    }

    /// Featured projects in storage order
    pub async fn get_featured_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = self.portfolio_repo.list_projects().await?;
        Ok(projects.into_iter().filter(|p| p.featured).collect())
    }

    /// Looks up a project by id; an unknown id is `Ok(None)`
    pub async fn get_project_by_id(&self, id: &str) -> Result<Option<Project>, AppError> {
        let projects = self.portfolio_repo.list_projects().await?;
        Ok(projects.into_iter().find(|p| p.id == id))
    }

    pub async fn get_all_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.portfolio_repo.list_skills().await
    }

    /// Exact match on the category's wire name. Unknown names yield an empty list.
    pub async fn get_skills_by_category(&self, category: &str) -> Result<Vec<Skill>, AppError> {
        let skills = self.portfolio_repo.list_skills().await?;
        Ok(skills
            .into_iter()
            .filter(|s| s.category.as_str() == category)
            .collect())
    }

    pub async fn get_about_info(&self) -> Result<AboutInfo, AppError> {
        self.portfolio_repo.get_about_info().await
    }

    /// Records a contact message as received and returns the stored copy
    pub async fn create_contact_message(
        &self,
        request: NewContactMessage,
    ) -> Result<ContactMessage, AppError> {
        let message = self.portfolio_repo.create_contact_message(request).await?;

        tracing::info!(
            subject = %message.subject,
            timestamp = %message.timestamp,
            "Contact message received"
        );

        Ok(message)
    }

    /// All contact messages, most recent first
    pub async fn get_all_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let mut messages = self.portfolio_repo.list_contact_messages().await?;

        // Reversing first keeps equal timestamps in newest-first order under the stable sort.
        messages.reverse();
        messages.sort_by_key(|m| Reverse(m.timestamp));
        Ok(messages)
    }

    pub async fn count_contact_messages(&self) -> Result<usize, AppError> {
        self.portfolio_repo.count_contact_messages().await
    }

    /// Counts, the about record and the most recently created projects
    pub async fn get_portfolio_overview(&self) -> Result<PortfolioOverview, AppError> {
        let projects = self.portfolio_repo.list_projects().await?;
        let skills_count = self.portfolio_repo.list_skills().await?.len();
        let about_info = self.portfolio_repo.get_about_info().await?;

        let total_projects = projects.len();
        let featured_projects = projects.iter().filter(|p| p.featured).count();

        let mut recent_projects = projects;
        recent_projects.sort_by_key(|p| Reverse(p.created_at));
        recent_projects.truncate(RECENT_PROJECTS_LIMIT);

        Ok(PortfolioOverview {
            total_projects,
            featured_projects,
            skills_count,
            years_experience: YEARS_EXPERIENCE,
            about_info,
            recent_projects,
        })
    }
}

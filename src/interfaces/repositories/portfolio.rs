use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    entities::{
        about_me::AboutInfo,
        contact_me::{ContactMessage, NewContactMessage},
        project::Project,
        skill::Skill,
    },
    errors::AppError,
    repositories::memory_repo::InMemoryPortfolioRepo,
    store::memory::PortfolioStore,
};

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// All projects in storage order
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;

    /// All skills in storage order
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;

    async fn get_about_info(&self) -> Result<AboutInfo, AppError>;

    /// Appends a message and returns the stored, timestamped record
    async fn create_contact_message(&self, msg: NewContactMessage) -> Result<ContactMessage, AppError>;

    /// All contact messages in creation order
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;

    async fn count_contact_messages(&self) -> Result<usize, AppError>;
}

impl InMemoryPortfolioRepo {
    pub fn new(store: Arc<PortfolioStore>) -> Self {
        InMemoryPortfolioRepo { store }
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolioRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.store.projects().to_vec())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        Ok(self.store.skills().to_vec())
    }

    async fn get_about_info(&self) -> Result<AboutInfo, AppError> {
        Ok(self.store.about().clone())
    }

    async fn create_contact_message(&self, msg: NewContactMessage) -> Result<ContactMessage, AppError> {
        Ok(self.store.append_message(msg))
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        Ok(self.store.messages())
    }

    async fn count_contact_messages(&self) -> Result<usize, AppError> {
        Ok(self.store.message_count())
    }
}

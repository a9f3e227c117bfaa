use std::{collections::HashSet, sync::Arc};

use chrono::Utc;
use parking_lot::RwLock;
use tracing::info;

use crate::{
    entities::{
        about_me::AboutInfo,
        contact_me::{ContactMessage, NewContactMessage},
        project::Project,
        skill::Skill,
    },
    errors::AppError,
    store::seed,
};

/// Owns every collection the API serves. Projects, skills and the about record are
/// fixed at construction; contact messages are appended through [`PortfolioStore::append_message`].
#[derive(Debug)]
pub struct PortfolioStore {
    projects: Vec<Project>,
    skills: Vec<Skill>,
    about: AboutInfo,
    messages: RwLock<Vec<ContactMessage>>,
}

impl PortfolioStore {
    pub fn new(projects: Vec<Project>, skills: Vec<Skill>, about: AboutInfo) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(projects.len());
        if let Some(dup) = projects.iter().find(|p| !seen.insert(p.id.as_str())) {
            return Err(AppError::Conflict(format!("duplicate project id '{}'", dup.id)));
        }

        Ok(PortfolioStore {
            projects,
            skills,
            about,
            messages: RwLock::new(Vec::new()),
        })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn about(&self) -> &AboutInfo {
        &self.about
    }

    /// Stamps and appends under the write lock, so storage order equals timestamp order.
    pub fn append_message(&self, input: NewContactMessage) -> ContactMessage {
        let mut messages = self.messages.write();
        let message = input.stamp(Utc::now());
        messages.push(message.clone());
        message
    }

    pub fn messages(&self) -> Vec<ContactMessage> {
        self.messages.read().clone()
    }

    pub fn message_count(&self) -> usize {
        self.messages.read().len()
    }
}

/// Builds the store from the bundled seed data.
pub fn create_store() -> Result<Arc<PortfolioStore>, AppError> {
    let store = PortfolioStore::new(seed::projects(), seed::skills(), seed::about_info())?;

    info!(
        "Portfolio store seeded: {} projects, {} skills.",
        store.projects.len(),
        store.skills.len()
    );

    Ok(Arc::new(store))
}

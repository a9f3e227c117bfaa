use std::time::{Duration, Instant};

use crate::{
    client::{
        api::PortfolioApiClient,
        error::ClientError,
        render::{render_project_grid, render_skill_groups},
        ui::{FadeInObserver, FilterBar, MenuToggle, Notification, NotificationKind, NotificationPhase},
        view_model::{group_skills, AboutView, PortfolioStats, ProjectCard},
    },
    entities::contact_me::NewContactMessage,
};

pub const CONTACT_SENT: &str = "Message sent successfully!";
pub const CONTACT_REJECTED: &str = "Failed to send message. Please try again.";
pub const CONTACT_FAILED: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Stats,
    Projects,
    Skills,
    About,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Complete,
    /// The load pass stopped at `section`; it and every later section stay unfilled.
    Aborted { section: Section, error: ClientError },
}

/// Page state driven by the portfolio script.
#[derive(Debug, Default)]
pub struct PortfolioPage {
    pub stats: Option<PortfolioStats>,
    pub project_cards: Vec<ProjectCard>,
    pub projects_html: Option<String>,
    pub skills_html: Option<String>,
    pub about: Option<AboutView>,
    pub menu: MenuToggle,
    pub filters: FilterBar,
    pub fade_in: FadeInObserver,
    pub contact_form: NewContactMessage,
    notifications: Vec<(Notification, Instant)>,
}

impl PortfolioPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches overview, projects, skills and about in order, filling each section
    /// as its data arrives. The first failure ends the pass and is only logged.
    pub async fn load_portfolio_data(&mut self, api: &PortfolioApiClient) -> LoadOutcome {
        match self.load_sections(api).await {
            Ok(()) => LoadOutcome::Complete,
            Err((section, error)) => {
                tracing::error!(?section, %error, "Error loading portfolio data");
                LoadOutcome::Aborted { section, error }
            }
        }
    }

    async fn load_sections(&mut self, api: &PortfolioApiClient) -> Result<(), (Section, ClientError)> {
        let overview = api.portfolio_overview().await.map_err(|e| (Section::Stats, e))?;
        self.stats = Some(PortfolioStats::from(&overview));

        let projects = api.projects().await.map_err(|e| (Section::Projects, e))?;
        self.project_cards = projects.iter().map(ProjectCard::from).collect();
        self.projects_html = Some(render_project_grid(&self.project_cards));
        for card in &self.project_cards {
            self.fade_in.observe(format!("project-{}", card.id));
        }

        let skills = api.skills().await.map_err(|e| (Section::Skills, e))?;
        let groups = group_skills(&skills);
        self.skills_html = Some(render_skill_groups(&groups));
        for group in &groups {
            self.fade_in.observe(format!("skills-{}", group.category));
        }

        let about = api.about().await.map_err(|e| (Section::About, e))?;
        self.about = Some(AboutView::from(&about));

        Ok(())
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    /// Activates a filter button. Cards left visible get `animate-fade-in`.
    pub fn select_filter(&mut self, filter: &str) {
        self.filters.select(filter);

        let shown: Vec<String> = self
            .visible_projects()
            .iter()
            .map(|card| format!("project-{}", card.id))
            .collect();
        for key in shown {
            self.fade_in.reveal(key);
        }
    }

    /// Cards left displayed by the active filter button.
    pub fn visible_projects(&self) -> Vec<&ProjectCard> {
        self.project_cards
            .iter()
            .filter(|card| self.filters.is_visible(&card.category))
            .collect()
    }

    /// Posts the contact form and raises a banner with the result. The form is
    /// cleared only when the server confirms the message.
    pub async fn submit_contact_form(&mut self, api: &PortfolioApiClient) -> NotificationKind {
        let (message, kind) = match api.submit_contact(&self.contact_form).await {
            Ok(response) if response.success => {
                self.contact_form = NewContactMessage::default();
                (CONTACT_SENT, NotificationKind::Success)
            }
            Ok(_) => (CONTACT_REJECTED, NotificationKind::Error),
            Err(e) if e.is_rejection() => (CONTACT_REJECTED, NotificationKind::Error),
            Err(e) => {
                tracing::warn!(error = %e, "Contact form submission failed");
                (CONTACT_FAILED, NotificationKind::Error)
            }
        };

        self.show_notification(Notification::new(message, kind));
        kind
    }

    pub fn show_notification(&mut self, notification: Notification) {
        self.notifications.push((notification, Instant::now()));
    }

    /// Banners still on screen at `now`, with their phase. Removed banners are dropped.
    pub fn notifications_at(&mut self, now: Instant) -> Vec<(&Notification, NotificationPhase)> {
        let phase_of = |shown_at: &Instant, n: &Notification| {
            n.phase(now.checked_duration_since(*shown_at).unwrap_or(Duration::ZERO))
        };

        self.notifications
            .retain(|(n, shown_at)| phase_of(shown_at, n) != NotificationPhase::Removed);

        self.notifications
            .iter()
            .map(|(n, shown_at)| (n, phase_of(shown_at, n)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    fn page_with_seeded_cards() -> PortfolioPage {
        let mut page = PortfolioPage::new();
        page.project_cards = seed::projects().iter().map(ProjectCard::from).collect();
        page
    }

    #[test]
    fn filter_buttons_hide_other_categories() {
        let mut page = page_with_seeded_cards();
        assert_eq!(page.visible_projects().len(), 4);

        page.select_filter("web");
        let ids: Vec<&str> = page.visible_projects().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);

        page.select_filter("design");
        assert!(page.visible_projects().is_empty());

        page.select_filter("all");
        assert_eq!(page.visible_projects().len(), 4);
    }

    #[test]
    fn filtering_animates_cards_left_visible() {
        let mut page = page_with_seeded_cards();
        for card in &page.project_cards {
            page.fade_in.observe(format!("project-{}", card.id));
        }

        page.select_filter("mobile");
        assert_eq!(page.fade_in.class_for("project-4"), Some("animate-fade-in"));
        assert_eq!(page.fade_in.class_for("project-1"), Some("opacity-0"));

        page.select_filter("all");
        assert_eq!(page.fade_in.class_for("project-1"), Some("animate-fade-in"));
    }

    #[test]
    fn notifications_expire_after_fade() {
        let mut page = PortfolioPage::new();
        page.show_notification(Notification::new(CONTACT_SENT, NotificationKind::Success));
        let shown = Instant::now();

        let visible = page.notifications_at(shown);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].1, NotificationPhase::Visible);

        let fading = page.notifications_at(shown + Duration::from_millis(3100));
        assert_eq!(fading[0].1, NotificationPhase::Fading);

        assert!(page.notifications_at(shown + Duration::from_secs(4)).is_empty());
        assert!(page.notifications_at(shown).is_empty());
    }

    #[test]
    fn fresh_page_has_closed_menu_and_empty_sections() {
        let mut page = PortfolioPage::new();
        assert!(page.stats.is_none());
        assert!(page.projects_html.is_none());
        assert_eq!(page.menu.class(), "hidden");

        page.toggle_menu();
        assert!(page.menu.is_open());
    }
}

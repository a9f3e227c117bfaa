use std::{collections::HashMap, time::Duration};

pub const COUNTER_STEPS: u32 = 50;
pub const COUNTER_TICK: Duration = Duration::from_millis(30);

pub const NOTIFICATION_VISIBLE_FOR: Duration = Duration::from_millis(3000);
pub const NOTIFICATION_FADE_FOR: Duration = Duration::from_millis(300);

pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN_BOTTOM_PX: i32 = -50;

pub const FILTER_ALL: &str = "all";

/// Mobile navigation menu; closed menus carry the `hidden` class.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn class(&self) -> &'static str {
        if self.open { "" } else { "hidden" }
    }
}

/// Count-up from zero in [`COUNTER_STEPS`] equal increments, one per [`COUNTER_TICK`].
/// Yields the floored value shown after each tick; the last value is the target.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
    ticks: u32,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        let target = target as f64;
        CounterAnimation {
            target,
            increment: target / f64::from(COUNTER_STEPS),
            current: 0.0,
            ticks: 0,
            finished: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target as u64
    }

    pub fn tick_interval(&self) -> Duration {
        COUNTER_TICK
    }
}

impl Iterator for CounterAnimation {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.finished {
            return None;
        }

        self.current += self.increment;
        self.ticks += 1;
        // The tick cap absorbs float drift in the running sum
        if self.current >= self.target || self.ticks >= COUNTER_STEPS {
            self.current = self.target;
            self.finished = true;
        }

        Some(self.current.floor() as u64)
    }
}

/// In-page anchor scroll request.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollIntoView {
    pub target_id: String,
    pub behavior: &'static str,
    pub block: &'static str,
}

/// Smooth-scroll for `#id` links; other hrefs are left to the browser.
pub fn scroll_target(href: &str) -> Option<ScrollIntoView> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }

    Some(ScrollIntoView {
        target_id: id.to_string(),
        behavior: "smooth",
        block: "start",
    })
}

/// Tracks `.fade-in-on-scroll` elements. Observed elements start hidden (`opacity-0`)
/// and switch to `animate-fade-in` the first time enough of them is visible.
#[derive(Debug, Clone, Default)]
pub struct FadeInObserver {
    revealed: HashMap<String, bool>,
}

impl FadeInObserver {
    pub fn observe(&mut self, key: impl Into<String>) {
        self.revealed.entry(key.into()).or_insert(false);
    }

    /// Reports an intersection; returns true when this call revealed the element.
    pub fn on_intersection(&mut self, key: &str, visible_ratio: f64) -> bool {
        match self.revealed.get_mut(key) {
            Some(revealed) if !*revealed && visible_ratio >= FADE_IN_THRESHOLD => {
                *revealed = true;
                true
            }
            _ => false,
        }
    }

    /// Marks an element revealed without waiting for an intersection.
    pub fn reveal(&mut self, key: impl Into<String>) {
        self.revealed.insert(key.into(), true);
    }

    pub fn class_for(&self, key: &str) -> Option<&'static str> {
        self.revealed
            .get(key)
            .map(|revealed| if *revealed { "animate-fade-in" } else { "opacity-0" })
    }

    pub fn observed(&self) -> usize {
        self.revealed.len()
    }

    /// `rootMargin` for the underlying intersection observer.
    pub fn root_margin() -> String {
        format!("0px 0px {}px 0px", FADE_IN_ROOT_MARGIN_BOTTOM_PX)
    }
}

/// Category filter buttons over the rendered project grid.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBar {
    buttons: Vec<String>,
    active: String,
}

impl Default for FilterBar {
    fn default() -> Self {
        FilterBar::new(["all", "web", "mobile", "design", "backend", "fullstack"])
    }
}

impl FilterBar {
    pub fn new<I, S>(buttons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterBar {
            buttons: buttons.into_iter().map(Into::into).collect(),
            active: FILTER_ALL.to_string(),
        }
    }

    pub fn select(&mut self, filter: &str) {
        self.active = filter.to_string();
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_visible(&self, category: &str) -> bool {
        self.active == FILTER_ALL || self.active == category
    }

    /// `(filter, class)` per button: the active one is primary.
    pub fn button_classes(&self) -> Vec<(&str, &'static str)> {
        self.buttons
            .iter()
            .map(|b| {
                let class = if *b == self.active { "btn-primary" } else { "btn-secondary" };
                (b.as_str(), class)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "bg-green-500",
            NotificationKind::Error => "bg-red-500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    Fading,
    Removed,
}

/// Transient banner.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Notification { message: message.into(), kind }
    }

    pub fn phase(&self, elapsed: Duration) -> NotificationPhase {
        if elapsed < NOTIFICATION_VISIBLE_FOR {
            NotificationPhase::Visible
        } else if elapsed < NOTIFICATION_VISIBLE_FOR + NOTIFICATION_FADE_FOR {
            NotificationPhase::Fading
        } else {
            NotificationPhase::Removed
        }
    }
}

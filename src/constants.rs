use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const YEARS_EXPERIENCE: u32 = 3;
pub const RECENT_PROJECTS_LIMIT: usize = 3;

//! Browser-side portfolio renderer, split so that everything except the
//! network calls runs without a browser: [`api`] fetches JSON, [`view_model`]
//! maps it to display data, [`render`] turns view-models into HTML fragments,
//! [`ui`] holds the page's interaction state and [`app`] drives a load pass.

pub mod api;
pub mod app;
pub mod error;
pub mod render;
pub mod ui;
pub mod view_model;

pub use api::PortfolioApiClient;
pub use app::{LoadOutcome, PortfolioPage};
pub use error::ClientError;

use std::{net::TcpListener, sync::Arc};

use actix_web::{dev::Server, middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

mod domain;
mod interfaces;
mod infrastructure;
pub mod client;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{store, telemetry, web as web_support};

use repositories::memory_repo::InMemoryPortfolioRepo;
use settings::AppConfig;
use store::memory::PortfolioStore;
use use_cases::portfolio::PortfolioHandler;

pub struct AppState {
    pub portfolio_handler: AppPortfolioHandler,
}

pub type AppPortfolioHandler = PortfolioHandler<InMemoryPortfolioRepo>;

impl AppState {
    pub fn new(store: Arc<PortfolioStore>) -> Self {
        let portfolio_repo = InMemoryPortfolioRepo::new(store);

        AppState {
            portfolio_handler: PortfolioHandler::new(portfolio_repo),
        }
    }
}

/// Builds the HTTP server on an already-bound listener. The shared state is created
/// once by the caller and handed to every worker.
pub fn run(
    listener: TcpListener,
    config: &AppConfig,
    app_state: web::Data<AppState>,
) -> std::io::Result<Server> {
    let worker_config = config.clone();

    let public_dir = config.public_dir.is_dir().then(|| config.public_dir.clone());
    if public_dir.is_none() {
        tracing::warn!(
            "Public directory {} not found; static assets will not be served",
            config.public_dir.display()
        );
    }

    let server = HttpServer::new(move || {
        let public_dir = public_dir.clone();

        App::new()
            .app_data(app_state.clone())
            .wrap(web_support::cors::build_cors(&worker_config))
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(routes::configure_routes)
            .configure(move |cfg| {
                if let Some(dir) = public_dir {
                    routes::configure_static_files(cfg, &dir);
                }
            })
    })
    .listen(listener)?
    .workers(config.worker_count)
    .disable_signals()
    .run();

    Ok(server)
}

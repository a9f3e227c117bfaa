use std::net::TcpListener;

use actix_web::web;
use portfolio_api::{
    graceful_shutdown::shutdown_signal,
    settings::AppConfig,
    store::memory::create_store,
    telemetry::init_tracing,
    AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config);
    tracing::info!("Loaded configuration: {:?}", config);

    let store = match create_store() {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to seed portfolio store: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = web::Data::new(AppState::new(store));

    let server_addr = config.server_addr();
    let listener = TcpListener::bind(&server_addr)?;

    tracing::info!(
        "🚀 Starting Portfolio API v{} on http://{}",
        env!("CARGO_PKG_VERSION"),
        listener.local_addr()?
    );
    tracing::info!("📁 Static files served from: {}", config.public_dir.display());

    let server = portfolio_api::run(listener, &config, app_state)?;
    let handle = server.handle();
    let server_task = actix_web::rt::spawn(server);

    tokio::select! {
        res = server_task => res.map_err(std::io::Error::other)?,
        _ = shutdown_signal() => {
            handle.stop(true).await;
            Ok(())
        }
    }
}

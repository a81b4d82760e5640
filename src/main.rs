//! Belo's Salon & Store server
//!
//! Bookings and point-of-sale REST API for the salon.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use belos_server::{
    api,
    clock::SystemClock,
    config::AppConfig,
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("belos_server={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting {} server v{}", config.salon.name, env!("CARGO_PKG_VERSION"));

    let clock = SystemClock::new(config.salon.utc_offset_minutes)?;

    let repository = Repository::in_memory();
    let config_snapshot = repository.config.get().await?;
    config_snapshot.validate()?;
    tracing::info!(
        window_days = config_snapshot.booking_window_days,
        "Salon configuration loaded"
    );

    let services = Services::new(repository, &config, Arc::new(clock));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

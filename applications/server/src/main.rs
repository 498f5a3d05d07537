/// Shortlink server - users/links CRUD API
use shortlink_server::{api, cache::CacheClient, config::ServerConfig, state::AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shortlink_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a missing database URL is fatal
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting shortlink server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = shortlink_storage::create_pool(&config.storage.database_url).await?;
    shortlink_storage::init_schema(&pool).await?;
    tracing::info!("Database connected");

    // Cache handle: opened here, unused by the handlers
    let cache = CacheClient::open()?;
    tracing::info!("Cache client ready");

    // Build application state and router
    let app = api::router(AppState::new(pool, cache));

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

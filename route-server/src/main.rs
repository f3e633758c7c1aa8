use route_server::config::ServerConfig;
use route_server::network::RailNetwork;
use route_server::web::{AppState, create_router};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("route_server=info,tower_http=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    // Load the rail network (fail fast if the seed is unusable)
    let network = match &config.seed {
        Some(path) => RailNetwork::load(path).unwrap_or_else(|e| {
            error!(error = %e, "Failed to load rail network");
            std::process::exit(1);
        }),
        None => {
            warn!("ROUTES_SEED not set, starting with an empty rail network");
            RailNetwork::new()
        }
    };

    // Build app state and router
    let state = AppState::new(network, config.search.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .unwrap_or_else(|e| {
            error!(addr = %config.addr, error = %e, "Failed to bind");
            std::process::exit(1);
        });

    info!(addr = %config.addr, "Route finder listening");
    info!("API Endpoints:");
    info!("  GET  /health        - Health check");
    info!("  GET  /cities        - List cities");
    info!("  POST /cities        - Add a city");
    info!("  GET  /trains        - List trains");
    info!("  POST /trains        - Add a train");
    info!("  POST /routes/find   - Find routes");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};

use uuidguard::{config::UuidGuardConfig, routes, state::AppState, tasks};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (creates default config file if it doesn't exist)
    const CONFIG_PATH: &str = "uuidguard.toml";
    if let Err(err) = UuidGuardConfig::create_default_config_if_missing(CONFIG_PATH) {
        eprintln!("Failed to create default config: {}", err);
    }

    let config = UuidGuardConfig::from_file_or_default(CONFIG_PATH);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting uuidguard with configuration from {}", CONFIG_PATH);

    let app_state = AppState::default();
    let mut schema_names: Vec<&str> = app_state.schemas.names().collect();
    schema_names.sort_unstable();
    tracing::info!(schemas = ?schema_names, "Registered input schemas");

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(config.rate_limiting.requests_per_second.into())
            .burst_size(config.rate_limiting.burst_size)
            .finish()
            .ok_or("rate limiting requires non-zero requests_per_second and burst_size")?,
    );
    tasks::limit::start_rate_limit_cleanup(&governor_conf, &config.rate_limiting);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().include_headers(true))
        .on_response(DefaultOnResponse::new().include_headers(true));

    let app = routes::create_router(app_state)
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(trace);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()
            .unwrap_or_else(|_| [0, 0, 0, 0].into()),
        config.server.port
    ));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}

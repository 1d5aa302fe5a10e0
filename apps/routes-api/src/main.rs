use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use routes_api::app::{build_router, with_middleware};
use routes_api::config::MiddlewareConfig;
use routes_api::constants::{ENV, LOCAL_ENV, SERVICE};
use routes_api::methods::routes::{API_V1_PREFIX, SERVICE_DOCS_PATH};
use routes_api::shutdown::shutdown_signal;
use routes_api::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing subscriber
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let env = std::env::var(ENV)
        .map_err(|_| format!("{} environment variable must be set", ENV))?;

    let registry = tracing_subscriber::registry().with(filter);

    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true);

    if env == LOCAL_ENV {
        let pretty_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .pretty();
        registry.with(json_layer).with(pretty_layer).init();
    } else {
        registry.with(json_layer).init();
    }

    tracing::info!(service = SERVICE, env = %env, "tracing initialized");

    let middleware_config = MiddlewareConfig::from_env();
    tracing::info!(
        port = middleware_config.port,
        rate_limit_per_minute = middleware_config.rate_limit_per_minute,
        rate_limit_burst = middleware_config.rate_limit_burst,
        request_timeout_secs = middleware_config.request_timeout.as_secs(),
        max_body_size = middleware_config.max_body_size,
        cors_origins = ?middleware_config.cors_allowed_origins,
        "middleware configuration loaded"
    );

    let state = AppState::new(env.clone());
    tracing::info!(
        version = state.routes.version,
        routes = state.routes.entries().len(),
        "route table loaded"
    );

    let mut app = with_middleware(build_router(state), &middleware_config);

    // Rate limiting layer (outermost), keyed by peer IP
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(middleware_config.replenish_interval_ms())
            .burst_size(middleware_config.rate_limit_burst)
            .finish()
            .ok_or("failed to build governor config")?,
    );
    app = app.layer(GovernorLayer {
        config: governor_conf,
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], middleware_config.port));
    let public_url = format!("http://127.0.0.1:{}", middleware_config.port);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("{} is ready to accept requests at: {}", SERVICE, public_url);
    tracing::info!("API v1 endpoints available at: {}{}", public_url, API_V1_PREFIX);
    tracing::info!("API docs available at: {}{}", public_url, SERVICE_DOCS_PATH);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal(middleware_config.shutdown_timeout))
    .await
    .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}

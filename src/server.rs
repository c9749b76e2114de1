/// Server setup and initialization
/// 
/// Wires together all components: snapshot store, activity registry, HTTP routes,
/// CORS, and static assets. Provides the main application factory function.

use crate::{
    activity::{ActivityRegistry, SnapshotStore},
    api::{create_activity_routes, AppState},
    config::Config,
};
use anyhow::Result;
use axum::{
    http::HeaderValue,
    response::Redirect,
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Create the main Axum application with all routes and middleware
/// 
/// Loads the activity snapshot into a fresh registry and builds the router around it.
pub async fn create_app(config: Config) -> Result<Router> {
    tracing::info!("📋 Loading activities from {}", config.storage.activities_file);
    let store = SnapshotStore::new(&config.storage.activities_file);
    let registry = Arc::new(ActivityRegistry::load(store));

    let app = build_router(registry, &config)?;

    tracing::info!("✅ Application initialized successfully");

    Ok(app)
}

/// Build the router over an existing registry
/// 
/// Split out from `create_app` so tests can drive the router against a registry they control.
pub fn build_router(registry: Arc<ActivityRegistry>, config: &Config) -> Result<Router> {
    let app_state = AppState { registry };

    tracing::info!("📡 Creating HTTP router with all endpoints");
    let app = Router::new()
        // Landing page lives in the static bundle
        .route("/", get(root_redirect))

        // Health check endpoint
        .route("/healthz", get(health_check))

        // Activity listing and enrollment API
        .merge(create_activity_routes().with_state(app_state))

        // Frontend assets
        .nest_service("/static", ServeDir::new(&config.server.static_dir))

        .layer(cors_layer(&config.server.cors_origins)?)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Start the HTTP server with the given configuration
/// 
/// Creates the application and starts the Axum server on the configured address and port.
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    tracing::info!("Starting activity registry server...");

    let app = create_app(config.clone()).await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Credentialed CORS for the configured frontend origins
/// 
/// Methods and headers are mirrored from the preflight, since wildcards are
/// not allowed together with credentials.
fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", origin, e))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Root redirect to the static frontend
async fn root_redirect() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}

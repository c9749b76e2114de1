/// Activity registry service
/// 
/// Main entry point. Loads configuration from the environment and starts the
/// HTTP server over the file-backed activity registry.

use activity_registry::{config::Config, server::start_server};

/// Application entry point
/// 
/// The server provides:
/// - Activity listing at GET /activities
/// - Signup at POST /activities/{name}/signup
/// - Unregister at DELETE /activities/{name}/unregister
/// - Frontend assets under /static (with / redirecting to /static/index.html)
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:8000 and ./activities.json)
    let config = Config::default();

    start_server(config).await?;

    Ok(())
}

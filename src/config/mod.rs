/// Configuration management for the activity registry service
/// 
/// Handles server binding, snapshot location, static assets, and CORS origins.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Snapshot storage configuration
    pub storage: StorageConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
    /// Directory served under /static
    pub static_dir: String,
    /// Origins allowed to make credentialed cross-origin requests
    pub cors_origins: Vec<String>,
}

/// Snapshot storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON snapshot file holding every activity (default: "activities.json")
    pub activities_file: String,
}

const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

impl Default for Config {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("ACTIVITIES_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("ACTIVITIES_PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .unwrap_or(8000),
                static_dir: std::env::var("ACTIVITIES_STATIC_DIR")
                    .unwrap_or_else(|_| "static".to_string()),
                cors_origins: std::env::var("ACTIVITIES_CORS_ORIGINS")
                    .map(|raw| parse_origins(&raw))
                    .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect()),
            },
            storage: StorageConfig {
                activities_file: std::env::var("ACTIVITIES_FILE")
                    .unwrap_or_else(|_| "activities.json".to_string()),
            },
        }
    }
}

/// Split a comma-separated origin list, dropping blank entries
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

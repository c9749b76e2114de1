/// HTTP API Layer
/// 
/// This module provides the REST endpoints over the activity registry. It handles:
/// - Activity listing
/// - Signup and unregister requests
/// - Mapping registry failures to HTTP status codes

// Activity listing and enrollment endpoints
pub mod activities;

// Registry error -> HTTP response mapping
pub mod error;

// Re-export router builder and shared state
pub use activities::{create_activity_routes, AppState};
pub use error::ApiError;

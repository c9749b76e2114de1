/// Activity registry: capacity-bounded enrollment with a file-backed snapshot
/// 
/// This library provides the enrollment core (activity registry plus JSON snapshot
/// store) and a thin axum HTTP layer over it.

// Core configuration and setup
pub mod config;

// Enrollment core - activity types, snapshot persistence, and the lock-guarded registry
pub mod activity;

// HTTP API layer - listing, signup, and unregister endpoints
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use activity::{Activity, ActivityMap, ActivityRegistry, RegistryError, SnapshotStore};
pub use server::{build_router, create_app, start_server};

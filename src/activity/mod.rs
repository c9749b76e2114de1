/// Activity Management Layer
/// 
/// This module owns the enrollment core: activity definitions, the JSON snapshot
/// store, and the lock-guarded registry. It provides:
/// - Type definitions (Activity, ActivityMap, outcomes)
/// - Whole-file JSON persistence with atomic replace
/// - Registry with lock-free reads and serialized mutations

// Core activity type definitions
pub mod types;

// Typed failures for registry and store operations
pub mod error;

// JSON snapshot persistence
pub mod storage;

// Enrollment registry guarding invariants and persistence
pub mod registry;

// Re-export commonly used types
pub use error::{RegistryError, StoreError};
pub use registry::ActivityRegistry;
pub use storage::SnapshotStore;
pub use types::{Activity, ActivityMap, EnrollOutcome, WithdrawOutcome};

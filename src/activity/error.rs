use thiserror::Error;

/// Snapshot store failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Registry operation failures
/// 
/// Everything except `Persist` is a caller error and is not worth retrying.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("activity not found: {0}")]
    NotFound(String),

    #[error("{participant} is already enrolled in {activity}")]
    AlreadyEnrolled { activity: String, participant: String },

    #[error("{participant} is not enrolled in {activity}")]
    NotEnrolled { activity: String, participant: String },

    #[error("{activity} is full ({max} participants)")]
    CapacityExceeded { activity: String, max: u32 },

    #[error("failed to persist activities: {0}")]
    Persist(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

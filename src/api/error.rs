use crate::activity::RegistryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

/// Error type for activity endpoints
/// 
/// Renders as `{"detail": "..."}` with the status the registry failure maps to.
#[derive(Debug)]
pub enum ApiError {
    /// Registry rejected or failed the operation
    Registry(RegistryError),
    /// Request email failed syntax validation
    InvalidEmail(String),
    /// Blocking task running the operation was cancelled or panicked
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Registry(RegistryError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Registry(
                RegistryError::AlreadyEnrolled { .. }
                | RegistryError::NotEnrolled { .. }
                | RegistryError::CapacityExceeded { .. },
            ) => StatusCode::BAD_REQUEST,
            ApiError::Registry(RegistryError::Persist(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidEmail(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message for this error
    pub fn detail(&self) -> &'static str {
        match self {
            ApiError::Registry(RegistryError::NotFound(_)) => "Activity not found",
            ApiError::Registry(RegistryError::AlreadyEnrolled { .. }) => "Student is already signed up",
            ApiError::Registry(RegistryError::CapacityExceeded { .. }) => "Activity is full",
            ApiError::Registry(RegistryError::NotEnrolled { .. }) => {
                "Student is not signed up for this activity"
            }
            ApiError::Registry(RegistryError::Persist(_)) => "Failed to persist activities",
            ApiError::InvalidEmail(_) => "Invalid email address",
            ApiError::Internal(_) => "Internal server error",
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        ApiError::Registry(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Registry(err @ RegistryError::Persist(_)) => {
                tracing::error!("❌ Request failed: {}", err)
            }
            ApiError::Internal(msg) => tracing::error!("❌ Request task failed: {}", msg),
            ApiError::InvalidEmail(email) => tracing::debug!("Rejected malformed email: {:?}", email),
            ApiError::Registry(_) => {}
        }
        let status = self.status();
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}

/// Activity enrollment REST API endpoints
/// 
/// Thin adapter over `ActivityRegistry`: validates request bodies, runs the
/// registry operation, and maps typed failures onto HTTP responses.

use crate::{
    activity::{ActivityMap, ActivityRegistry},
    api::error::ApiError,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Enrollment registry shared by every handler
    pub registry: Arc<ActivityRegistry>,
}

/// Request body for signup and unregister
#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

/// Response for successful signup/unregister operations
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create activity routes
/// 
/// Sets up listing, signup, and unregister endpoints over the shared registry.
pub fn create_activity_routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}/signup", post(signup_for_activity))
        .route("/activities/{activity_name}/unregister", delete(unregister_from_activity))
}

/// List all activities
/// 
/// GET /activities
/// Returns: { "<name>": { "description": "...", "schedule": "...", "max_participants": 12, "participants": [...] } }
async fn list_activities(State(state): State<AppState>) -> Json<ActivityMap> {
    Json(state.registry.list().as_ref().clone())
}

/// Sign up a participant for an activity
/// 
/// POST /activities/{activity_name}/signup
/// Body: { "email": "..." }
async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Json(body): Json<EmailRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let email = validate_email(body.email)?;

    let registry = Arc::clone(&state.registry);
    let outcome = tokio::task::spawn_blocking(move || registry.enroll(&activity_name, &email))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok((StatusCode::CREATED, Json(MessageResponse { message: outcome.message() })))
}

/// Unregister a participant from an activity
/// 
/// DELETE /activities/{activity_name}/unregister
/// Body: { "email": "..." }
async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Json(body): Json<EmailRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = validate_email(body.email)?;

    let registry = Arc::clone(&state.registry);
    let outcome = tokio::task::spawn_blocking(move || registry.withdraw(&activity_name, &email))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(MessageResponse { message: outcome.message() }))
}

/// Single address, one `@`, dotted domain, no whitespace
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
        .expect("email regex is valid")
});

/// Trim and syntax-check an email before it reaches the registry
fn validate_email(raw: String) -> Result<String, ApiError> {
    let email = raw.trim();
    if EMAIL_RE.is_match(email) {
        Ok(email.to_string())
    } else {
        Err(ApiError::InvalidEmail(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        for email in ["michael@mergington.edu", "a.b+clubs@x.co.uk", "o'neil@school.org"] {
            assert!(validate_email(email.to_string()).is_ok(), "{email}");
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_email("  a@x.com \n".to_string()).unwrap(), "a@x.com");
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["", "plain", "@x.com", "a@", "a@x", "a b@x.com", "a@x..com", "a@@x.com"] {
            assert!(validate_email(email.to_string()).is_err(), "{email}");
        }
    }
}

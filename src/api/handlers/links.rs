//! Handlers for link management endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Deletes a short link.
///
/// # Endpoint
///
/// `DELETE /{code}`
///
/// The record is removed from the store; subsequent redirects return 404.
///
/// # Errors
///
/// Returns 400 Bad Request if the code is empty.
/// Returns 404 Not Found if the link doesn't exist or is already deleted.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if code.is_empty() {
        return Err(AppError::bad_request("short code is required", json!({})));
    }

    state
        .link_service
        .delete_short_url(&code)
        .await
        .map_err(|e| match e {
            AppError::NotFound { details, .. } => {
                AppError::not_found("URL not found or already deleted", details)
            }
            other => other,
        })?;

    Ok(StatusCode::NO_CONTENT)
}

/// Rejects redirect/delete requests that carry no short code (`GET /`, `DELETE /`).
pub async fn missing_code_handler() -> AppError {
    AppError::bad_request("short code is required", json!({}))
}

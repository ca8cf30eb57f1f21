//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `301 Moved Permanently` and the original URL in `Location`.
///
/// # Errors
///
/// Returns 400 Bad Request if the code is empty.
/// Returns 404 Not Found if the code doesn't exist or has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if code.is_empty() {
        return Err(AppError::bad_request("short code is required", json!({})));
    }

    let original_url = state.link_service.get_original_url(&code).await?;

    // Stored URLs are arbitrary text; a value that cannot be a header is a stored-data fault.
    let location = HeaderValue::from_str(&original_url).map_err(|e| {
        AppError::internal(
            "failed to build redirect",
            json!({ "code": code, "reason": e.to_string() }),
        )
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

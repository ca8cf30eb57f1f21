//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:8080/Xb3_k9Qa" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or `original_url` is missing/empty.
/// Returns 500 Internal Server Error if the link cannot be stored.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let code = state
        .link_service
        .create_short_url(&payload.original_url)
        .await?;

    Ok(Json(ShortenResponse {
        short_url: state.link_service.short_url(&code),
    }))
}

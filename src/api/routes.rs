//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, health_handler, missing_code_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link routes.
///
/// # Endpoints
///
/// - `POST   /shorten` - Create a short URL
/// - `GET    /health`  - Store reachability check
/// - `GET    /{code}`  - 301 redirect to the original URL
/// - `DELETE /{code}`  - Delete a short URL
/// - `GET|DELETE /`    - 400, short code missing
///
/// `/shorten` and `/health` are static segments and take priority over `/{code}`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route(
            "/{code}",
            get(redirect_handler).delete(delete_link_handler),
        )
        .route(
            "/",
            get(missing_code_handler).delete(missing_code_handler),
        )
}

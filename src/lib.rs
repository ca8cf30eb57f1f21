//! # URL Shortener
//!
//! Maps long URLs to short random codes and resolves them back, with Redis as
//! the backing store and a fixed expiry per link.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The link record and the storage trait
//! - **Application Layer** ([`application`]) - Link lifecycle orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /shorten` - `{"original_url": "..."}` → `{"short_url": "..."}`
//! - `GET /{code}` - 301 redirect to the original URL
//! - `DELETE /{code}` - 204 on success
//! - `GET /health` - store reachability
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_HOST="localhost:6379"
//! export BASE_URL="http://localhost:8080/"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::repositories::{LinkStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryLinkStore, RedisLinkStore};
    pub use crate::state::AppState;
}

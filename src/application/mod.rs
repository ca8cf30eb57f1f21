//! Application layer services implementing business logic.
//!
//! Services consume the storage trait and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, resolution and deletion

pub mod services;

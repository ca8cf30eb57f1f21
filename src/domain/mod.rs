//! Domain layer containing the link record and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait definitions and their error type
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Concrete stores live in [`crate::infrastructure::store`].

pub mod entities;
pub mod repositories;

//! Core domain entities.
//!
//! - [`Link`] - A short code mapped to an original URL, with an expiry

pub mod link;

pub use link::Link;

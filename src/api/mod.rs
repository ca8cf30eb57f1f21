//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and maps results to
//! status codes and JSON bodies.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request logging middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

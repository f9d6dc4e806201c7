//! JSON API layer.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - JSON route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

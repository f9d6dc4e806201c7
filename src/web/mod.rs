//! Server-rendered HTML pages.
//!
//! Uses Askama templates from `templates/` for rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;

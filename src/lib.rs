//! # datetime-endpoint
//!
//! A small web service built with Axum: two server-rendered pages and one
//! JSON endpoint whose body is memoized in Redis.
//!
//! ## Routes
//!
//! - `GET /` - Home page
//! - `GET /datetime` - Date/time page
//! - `GET /hour` - `{"url": "/datetime"}`, cached for `CACHE_DEFAULT_TIMEOUT` seconds
//! - `GET /health` - Cache backend health
//!
//! ## Architecture
//!
//! - **Infrastructure Layer** ([`infrastructure`]) - Cache backends
//! - **Application Layer** ([`application`]) - Response memoization
//! - **API Layer** ([`api`]) - JSON handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - Askama-rendered pages
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! export LISTEN="127.0.0.1:8080"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for the admin
/// binary and integration tests.
pub mod prelude {
    pub use crate::application::services::ViewCache;
    pub use crate::config::{CacheType, Config};
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{CacheError, CacheService};
    pub use crate::routes::{app_router, paths, router};
    pub use crate::state::AppState;
}

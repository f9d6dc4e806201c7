//! HTTP request handlers for JSON endpoints.

pub mod fallback;
pub mod health;
pub mod hour;

pub use fallback::not_found_handler;
pub use health::health_handler;
pub use hour::hour_handler;

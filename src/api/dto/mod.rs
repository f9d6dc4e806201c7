//! Data Transfer Objects for JSON responses.

pub mod health;
pub mod hour;

pub use health::{CheckStatus, HealthChecks, HealthResponse};
pub use hour::HourResponse;

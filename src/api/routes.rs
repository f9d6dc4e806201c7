//! JSON route configuration.

use crate::api::handlers::{health_handler, hour_handler};
use crate::routes::paths;
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON endpoints.
///
/// # Endpoints
///
/// - `GET /hour` - Cached reference to the date/time page
/// - `GET /health` - Cache backend health
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(paths::HOUR, get(hour_handler))
        .route(paths::HEALTH, get(health_handler))
}

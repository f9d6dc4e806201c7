//! Page route configuration.

use crate::routes::paths;
use crate::state::AppState;
use crate::web::handlers::{datetime_handler, home_handler};
use axum::{Router, routing::get};

/// HTML pages.
///
/// # Endpoints
///
/// - `GET /` - Home page
/// - `GET /datetime` - Date/time page
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(paths::HOME, get(home_handler))
        .route(paths::DATETIME, get(datetime_handler))
}

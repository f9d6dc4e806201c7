//! Fallback for paths with no registered route.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Answers any unmatched request with `404 Not Found`.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}

//! Handler for the cached hour endpoint.

use axum::{extract::State, http::header, response::IntoResponse};

use crate::api::dto::HourResponse;
use crate::error::AppError;
use crate::routes::paths;
use crate::state::AppState;

/// Returns a JSON reference to the date/time page.
///
/// # Endpoint
///
/// `GET /hour`
///
/// # Cache Strategy
///
/// The serialized body is stored under the request path for the configured
/// timeout (3000 seconds by default). Within that window every caller gets
/// the byte-identical stored payload.
///
/// # Response
///
/// ```json
/// {"url": "/datetime"}
/// ```
///
/// # Errors
///
/// Returns 500 Internal Server Error when the cache backend fails.
pub async fn hour_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = state
        .view_cache
        .get_or_compute(paths::HOUR, || async {
            let response = HourResponse {
                url: paths::DATETIME.to_string(),
            };
            Ok::<_, AppError>(serde_json::to_string(&response)?)
        })
        .await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

//! Date/time page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use chrono::{SecondsFormat, Utc};

use crate::routes::paths;

/// Template for the date/time page.
///
/// `rendered_at` is the server clock at render time; the page script
/// keeps a live client-side clock next to it.
#[derive(Template, WebTemplate)]
#[template(path = "datetime.html")]
struct DateTimeTemplate {
    rendered_at: String,
    home_url: &'static str,
}

/// Renders the date/time page.
///
/// # Endpoint
///
/// `GET /datetime`
pub async fn datetime_handler() -> impl IntoResponse {
    DateTimeTemplate {
        rendered_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        home_url: paths::HOME,
    }
}

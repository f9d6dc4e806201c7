//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::routes::paths;

/// Template for the home page.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct HomeTemplate {
    datetime_url: &'static str,
    hour_url: &'static str,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// A rendering failure is answered with `500 Internal Server Error`.
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {
        datetime_url: paths::DATETIME,
        hour_url: paths::HOUR,
    }
}

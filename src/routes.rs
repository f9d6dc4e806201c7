//! Top-level router configuration combining page and JSON routes.
//!
//! # Route Structure
//!
//! - `GET /`         - Home page
//! - `GET /datetime` - Date/time page
//! - `GET /hour`     - Cached JSON reference to `/datetime`
//! - `GET /health`   - Cache backend health
//!
//! Anything else is answered by [`not_found_handler`] with `404 Not Found`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Route paths, shared by registration and URL generation.
pub mod paths {
    pub const HOME: &str = "/";
    pub const DATETIME: &str = "/datetime";
    pub const HOUR: &str = "/hour";
    pub const HEALTH: &str = "/health";
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub endpoint: &'static str,
    pub cached: bool,
}

/// Every registered route, in registration order.
pub const ROUTES: &[RouteInfo] = &[
    RouteInfo {
        method: "GET",
        path: paths::HOME,
        endpoint: "home",
        cached: false,
    },
    RouteInfo {
        method: "GET",
        path: paths::DATETIME,
        endpoint: "datetime_page",
        cached: false,
    },
    RouteInfo {
        method: "GET",
        path: paths::HOUR,
        endpoint: "hour",
        cached: true,
    },
    RouteInfo {
        method: "GET",
        path: paths::HEALTH,
        endpoint: "health",
        cached: false,
    },
];

/// Builds the router with all routes, the 404 fallback and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .merge(api::routes::routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] wrapped in trailing-slash
/// normalization, so `/hour/` resolves to `/hour`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_route_table_has_unique_paths_and_endpoints() {
        let paths: HashSet<_> = ROUTES.iter().map(|r| (r.method, r.path)).collect();
        let endpoints: HashSet<_> = ROUTES.iter().map(|r| r.endpoint).collect();

        assert_eq!(paths.len(), ROUTES.len());
        assert_eq!(endpoints.len(), ROUTES.len());
    }

    #[test]
    fn test_only_hour_is_cached() {
        let cached: Vec<_> = ROUTES.iter().filter(|r| r.cached).map(|r| r.path).collect();

        assert_eq!(cached, vec![paths::HOUR]);
    }
}

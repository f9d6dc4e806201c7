mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_test::TestServer;
use datetime_endpoint::routes::{ROUTES, app_router, router};
use tower::ServiceExt;

#[tokio::test]
async fn test_unknown_path_is_404() {
    let (state, _cache) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/does-not-exist").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["path"], "/does-not-exist");
}

#[tokio::test]
async fn test_every_registered_route_responds() {
    let (state, _cache) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    for route in ROUTES {
        let response = server.get(route.path).await;
        assert_eq!(
            response.status_code(),
            StatusCode::OK,
            "{} {} ({})",
            route.method,
            route.path,
            route.endpoint
        );
    }
}

#[tokio::test]
async fn test_only_cached_routes_store_in_cache() {
    for route in ROUTES {
        let (state, cache) = common::create_test_state();
        let server = TestServer::new(router(state)).unwrap();

        server.get(route.path).await.assert_status_ok();
        server.get(route.path).await.assert_status_ok();

        let expected = if route.cached { 1 } else { 0 };
        assert_eq!(
            cache.sets(),
            expected,
            "{} {} ({})",
            route.method,
            route.path,
            route.endpoint
        );
    }
}

#[tokio::test]
async fn test_registered_routes_reject_other_methods() {
    let (state, _cache) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    for route in ROUTES {
        assert_eq!(route.method, "GET");
        server
            .delete(route.path)
            .await
            .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let (state, _cache) = common::create_test_state();
    let app = app_router(state);

    let response = app
        .oneshot(Request::builder().uri("/hour/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["url"], "/datetime");
}

#[tokio::test]
async fn test_app_router_unknown_path_is_404() {
    let (state, _cache) = common::create_test_state();
    let app = app_router(state);

    let response = app
        .oneshot(Request::builder().uri("/nope/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use httpmock::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use vrctime::adapters::cache::{CachedLocationResolver, DEFAULT_TTL};
use vrctime::adapters::geo::IpApiLocationResolver;
use vrctime::adapters::tz::FinderTimezoneResolver;
use vrctime::app::routes::{router, AppState};
use vrctime::app::service::ClockService;

fn full_router(geo_endpoint: String, ttl: Duration) -> axum::Router {
    let resolver = CachedLocationResolver::new(
        IpApiLocationResolver::new(reqwest::Client::new(), geo_endpoint),
        ttl,
    );
    let clock = ClockService::new(Arc::new(resolver), Arc::new(FinderTimezoneResolver::new()));
    router(Arc::new(AppState {
        clock,
        ip_header: "x-real-ip".to_string(),
        cell_size: 8,
    }))
}

async fn get(app: &axum::Router, path: &str, ip: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::get(path)
                .header("x-real-ip", ip)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn end_to_end_serves_png_and_caches_the_lookup() {
    let server = MockServer::start();
    let geo_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/203.0.113.9")
            .query_param("fields", "lat,lon");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"lat": 40.7128, "lon": -74.0060}));
    });

    let app = full_router(server.url(""), DEFAULT_TTL);

    for _ in 0..2 {
        let response = get(&app, "/vrctime", "203.0.113.9").await;
        assert_eq!(response.status(), StatusCode::OK);

        let png = response.into_body().collect().await.unwrap().to_bytes();
        let img = image::load_from_memory(&png).unwrap().to_rgb8();
        assert_eq!((img.width(), img.height()), (64, 64));
    }

    // Second request within the TTL must be served from the cache.
    geo_mock.assert_hits(1);
}

#[tokio::test]
async fn upstream_outage_falls_back_to_tokyo_and_is_not_cached() {
    let server = MockServer::start();
    let geo_mock = server.mock(|when, then| {
        when.method(GET).path("/198.51.100.7");
        then.status(503);
    });

    let app = full_router(server.url(""), DEFAULT_TTL);

    // The endpoint still answers 200 with a readable time line.
    let response = get(&app, "/vrctime_test", "198.51.100.7").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.starts_with("ip: 198.51.100.7, time: "));

    // Failures pass through uncached: a second request hits upstream again.
    let response = get(&app, "/vrctime_test", "198.51.100.7").await;
    assert_eq!(response.status(), StatusCode::OK);
    geo_mock.assert_hits(2);
}

#[tokio::test]
async fn payload_without_coordinates_falls_back() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/192.0.2.1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"status": "fail"}));
    });

    let app = full_router(server.url(""), DEFAULT_TTL);

    let response = get(&app, "/vrctime", "192.0.2.1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let png = response.into_body().collect().await.unwrap().to_bytes();
    assert!(image::load_from_memory(&png).is_ok());
}

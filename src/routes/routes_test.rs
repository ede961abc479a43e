use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

#[tokio::test]
async fn healthz_reports_ok_and_version() {
    let Json(health) = healthz().await;
    assert_eq!(health, Health { status: "ok", version: env!("CARGO_PKG_VERSION") });
}

#[tokio::test]
async fn healthz_route_returns_json() {
    let response = service_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn unknown_service_route_is_not_found() {
    let response = service_routes()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn pkg_dir_prefers_configured_site_root() {
    assert_eq!(pkg_dir(&ServerConfig::default(), "target/site", "pkg"), PathBuf::from("target/site/pkg"));

    let config = ServerConfig { site_root: Some(PathBuf::from("/srv/site")), ..ServerConfig::default() };
    assert_eq!(pkg_dir(&config, "target/site", "pkg"), PathBuf::from("/srv/site/pkg"));
}

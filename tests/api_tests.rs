use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower::ServiceExt;

// Router de test con el mismo contrato de superficie que el servidor real.
// Los handlers reales necesitan PostgreSQL; acá se valida la forma de la
// API (rutas, métodos, envelope de respuestas).
fn create_test_app() -> Router {
    Router::new()
        .route(
            "/pricing/health",
            get(|| async {
                Json(json!({
                    "service": "pricing",
                    "status": "healthy",
                }))
            }),
        )
        .route(
            "/pricing/quote",
            post(|| async {
                Json(json!({
                    "final_price": "7450.00",
                    "currency": "NGN",
                }))
            }),
        )
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/pricing/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["service"], "pricing");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_quote_requires_post() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/pricing/quote")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/pricing/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

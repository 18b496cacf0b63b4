use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::routes::{self, ServerState};

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

async fn build_app() -> anyhow::Result<Router> {
    let db = models::db::connect_url("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    service::seed::seed_sample_data(&db, false).await?;
    Ok(routes::build_router(ServerState { db }, cors()))
}

async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let res = app.clone().oneshot(req).await?;
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, body))
}

#[tokio::test]
async fn non_numeric_id_is_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;
    for method in ["GET", "DELETE"] {
        let req = Request::builder().method(method).uri("/restaurants/abc").body(Body::empty())?;
        let (status, body) = send(&app, req).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Restaurant not found"}));
    }
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_validation_error() -> anyhow::Result<()> {
    let app = build_app().await?;
    let cases = [
        "{not json",
        r#"{"price": 5}"#,
        r#"{"price": "five", "pizza_id": 1, "restaurant_id": 1}"#,
    ];
    for raw in cases {
        let req = Request::builder()
            .method("POST")
            .uri("/restaurant_pizzas")
            .header("content-type", "application/json")
            .body(Body::from(raw))?;
        let (status, body) = send(&app, req).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{raw}");
        assert_eq!(body, json!({"errors": ["validation errors"]}));
    }

    let req = Request::builder()
        .method("POST")
        .uri("/restaurant_pizzas")
        .body(Body::from(r#"{"price": 5, "pizza_id": 1, "restaurant_id": 1}"#))?;
    let (status, body) = send(&app, req).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"errors": ["validation errors"]}));
    Ok(())
}

#[tokio::test]
async fn seeded_detail_view() -> anyhow::Result<()> {
    let app = build_app().await?;
    let req = Request::builder().uri("/restaurants/1").body(Body::empty())?;
    let (status, body) = send(&app, req).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Karen's Pizza Shack",
            "address": "address1",
            "restaurant_pizzas": [{"id": 1, "price": 1, "pizza_id": 1, "restaurant_id": 1}]
        })
    );
    Ok(())
}

#[tokio::test]
async fn health_and_unknown_route() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, Request::builder().uri("/health").body(Body::empty())?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = send(&app, Request::builder().uri("/nope").body(Body::empty())?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Resource not found"}));

    let (status, _) = send(&app, Request::builder().uri("/api-docs/openapi.json").body(Body::empty())?).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#![cfg(feature = "server")]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;
use wsite_assets::AssetStore;
use wsite_domain::config::SiteConfig;
use wsite_kernel::server::ApiState;

async fn app(temp: &TempDir) -> axum::Router {
    let assets = AssetStore::builder().root(temp.path()).connect().await.unwrap();
    let state = ApiState::builder()
        .config(SiteConfig::default())
        .assets(assets)
        .register_slice(wsite_editor::init().unwrap())
        .build()
        .unwrap();

    let (router, _docs) = wsite_editor::routes::router().split_for_parts();
    router.with_state(state)
}

fn hero_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/hero")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn rewrites_hero_type_in_place() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("landing.json"),
        serde_json::to_vec_pretty(&json!({
            "company": { "name": "Voltwerk GmbH" },
            "hero": { "type": "classic", "title": "Hallo" }
        }))
        .unwrap(),
    )
    .unwrap();

    let response = app(&temp)
        .await
        .oneshot(hero_request(json!({ "heroType": "video", "contentFile": "landing.json" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["heroType"], json!("video"));

    let on_disk: Value =
        serde_json::from_slice(&std::fs::read(temp.path().join("landing.json")).unwrap()).unwrap();
    assert_eq!(on_disk["hero"]["type"], json!("video"));
    assert_eq!(on_disk["hero"]["title"], json!("Hallo"), "other hero fields survive");
}

#[tokio::test]
async fn missing_file_is_404_and_nothing_is_created() {
    let temp = TempDir::new().unwrap();

    let response = app(&temp)
        .await
        .oneshot(hero_request(json!({ "heroType": "video", "contentFile": "absent.json" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert!(!temp.path().join("absent.json").exists(), "404 must not create the file");
}

#[tokio::test]
async fn traversal_file_names_are_400() {
    let temp = TempDir::new().unwrap();

    for name in ["../outside.json", "nested/inside.json", "plain.txt"] {
        let response = app(&temp)
            .await
            .oneshot(hero_request(json!({ "heroType": "video", "contentFile": name })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{name} must be rejected");
    }
}

#[tokio::test]
async fn empty_hero_type_is_400() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("landing.json"), b"{}").unwrap();

    let response = app(&temp)
        .await
        .oneshot(hero_request(json!({ "heroType": "   ", "contentFile": "landing.json" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

//! API test suite: exercises the axum router in-process, including the
//! end-to-end create → list → select → preview scenario.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use snipvault_editor::EditorController;
use snipvault_preview::BASE_STYLE;
use tower::ServiceExt;

use crate::server::{router, AppState};
use crate::store::LibraryStore;

fn empty_app() -> Router {
    router(Arc::new(AppState::new(LibraryStore::new())))
}

fn seeded_app() -> Router {
    router(Arc::new(AppState::new(LibraryStore::with_samples())))
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn seeded_library_lists_buttons_category() {
    let app = seeded_app();

    let (status, categories) = get_json(&app, "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(categories[0]["name"], "Buttons");
    assert_eq!(categories[0]["componentCount"], 3);
}

#[tokio::test]
async fn create_category_requires_name() {
    let app = empty_app();

    let (status, body) =
        send_json(&app, "POST", "/api/categories", json!({ "name": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Category name is required");

    // Nothing was created.
    let (_, categories) = get_json(&app, "/api/categories").await;
    assert_eq!(categories.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_category_defaults_icon() {
    let app = empty_app();

    let (status, category) =
        send_json(&app, "POST", "/api/categories", json!({ "name": "Forms" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(category["icon"], "fas fa-folder");
}

#[tokio::test]
async fn create_component_validates_required_fields() {
    let app = seeded_app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/components",
        json!({ "name": "", "categoryId": 1, "html": "<b>x</b>" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Component name is required");

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/components",
        json!({ "name": "Pill", "categoryId": 1, "html": "   " }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "HTML code is required");

    // The seeded category still holds exactly its three samples.
    let (_, components) = get_json(&app, "/api/components?categoryId=1").await;
    assert_eq!(components.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn create_component_rejects_unknown_category() {
    let app = empty_app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/components",
        json!({ "name": "Pill", "categoryId": 99, "html": "<b>x</b>" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Category 99 not found");
}

#[tokio::test]
async fn list_components_requires_category_id() {
    let app = seeded_app();
    let (status, _) = get_json(&app, "/api/components").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_component_patches_fragments() {
    let app = seeded_app();

    let (status, updated) = send_json(
        &app,
        "PUT",
        "/api/components/1",
        json!({ "css": ".primary-btn { color: black; }" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["css"], ".primary-btn { color: black; }");
    // Untouched fragments survive the partial update.
    assert_eq!(
        updated["html"],
        "<button class=\"primary-btn\">Primary Button</button>"
    );

    let (status, body) = send_json(&app, "PUT", "/api/components/999", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Component 999 not found");
}

#[tokio::test]
async fn preview_endpoint_serves_sandboxed_page() {
    let app = seeded_app();

    let request = Request::builder()
        .uri("/api/components/1/preview")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(page.contains("<iframe sandbox=\"allow-scripts\""));
    // The compiled document is attribute-escaped inside srcdoc.
    assert!(page.contains("&lt;button class=&quot;primary-btn&quot;&gt;"));
}

#[tokio::test]
async fn end_to_end_create_browse_and_preview() {
    let app = empty_app();

    // Create a category; it lists with zero components.
    let (status, badges) =
        send_json(&app, "POST", "/api/categories", json!({ "name": "Badges" })).await;
    assert_eq!(status, StatusCode::CREATED);
    let badges_id = badges["id"].as_u64().unwrap();

    let (_, categories) = get_json(&app, "/api/categories").await;
    assert_eq!(categories[0]["name"], "Badges");
    assert_eq!(categories[0]["componentCount"], 0);

    // Create a component in it.
    let (status, pill) = send_json(
        &app,
        "POST",
        "/api/components",
        json!({
            "name": "Pill",
            "categoryId": badges_id,
            "html": "<span>X</span>",
            "css": "",
            "js": "",
            "tags": ["badge"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // It appears in the category listing, and the count updates.
    let uri = format!("/api/components?categoryId={badges_id}");
    let (_, components) = get_json(&app, &uri).await;
    assert_eq!(components.as_array().unwrap().len(), 1);
    assert_eq!(components[0]["name"], "Pill");

    let (_, categories) = get_json(&app, "/api/categories").await;
    assert_eq!(categories[0]["componentCount"], 1);

    // Selecting it in the editor compiles saved fragments with the reset.
    let component = serde_json::from_value(pill).unwrap();
    let mut controller = EditorController::new();
    controller.select(component);

    let preview = controller.preview().expect("preview after select");
    assert!(preview.contains("<span>X</span>"));
    assert!(preview.contains(BASE_STYLE));
}

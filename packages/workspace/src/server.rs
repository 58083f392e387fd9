//! HTTP API for the snippet library.
//!
//! REST-style routes over the in-memory [`LibraryStore`]:
//!
//! | Route | Behavior |
//! |---|---|
//! | `GET /api/categories` | list categories with derived counts |
//! | `POST /api/categories` | create a category |
//! | `GET /api/components?categoryId=N` | list a category's components |
//! | `GET /api/components/:id` | fetch one component |
//! | `POST /api/components` | create a component |
//! | `PUT /api/components/:id` | partial fragment update |
//! | `GET /api/components/:id/preview` | compiled preview page (text/html) |
//!
//! Errors come back as JSON `{ "message": … }` with 400 for validation
//! failures and 404 for unknown ids. Store state is only mutated on
//! success.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use snipvault_common::{FragmentPatch, Fragments, NewCategory, NewComponent, StoreError};
use snipvault_editor::DEFAULT_CATEGORY_ICON;
use snipvault_preview::{compile, sandbox_embed};

use crate::store::LibraryStore;

/// Shared state for HTTP handlers.
pub struct AppState {
    pub store: Mutex<LibraryStore>,
}

impl AppState {
    pub fn new(store: LibraryStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }
}

/// Build the API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/categories", get(list_categories).post(create_category))
        .route("/api/components", get(list_components).post(create_component))
        .route(
            "/api/components/:id",
            get(get_component).put(update_component),
        )
        .route("/api/components/:id/preview", get(preview_component))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

fn error_response(error: StoreError) -> Response {
    let status = match &error {
        StoreError::Validation(_) => StatusCode::BAD_REQUEST,
        StoreError::CategoryNotFound(_) | StoreError::ComponentNotFound(_) => {
            StatusCode::NOT_FOUND
        }
    };
    tracing::warn!(%error, "request failed");
    (
        status,
        Json(ErrorBody {
            message: error.to_string(),
        }),
    )
        .into_response()
}

// ============================================================================
// Categories
// ============================================================================

async fn list_categories(State(state): State<Arc<AppState>>) -> Response {
    let categories = state.store.lock().unwrap().list_categories();
    Json(categories).into_response()
}

#[derive(Debug, Deserialize)]
struct CreateCategoryRequest {
    name: String,
    icon: Option<String>,
    description: Option<String>,
}

async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateCategoryRequest>,
) -> Response {
    let new = NewCategory {
        name: request.name,
        icon: request
            .icon
            .filter(|icon| !icon.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY_ICON.to_string()),
        description: request.description.filter(|d| !d.is_empty()),
    };

    match state.store.lock().unwrap().create_category(new) {
        Ok(category) => (StatusCode::CREATED, Json(category)).into_response(),
        Err(e) => error_response(e),
    }
}

// ============================================================================
// Components
// ============================================================================

#[derive(Debug, Deserialize)]
struct ComponentsQuery {
    #[serde(rename = "categoryId")]
    category_id: Option<u32>,
}

async fn list_components(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ComponentsQuery>,
) -> Response {
    let Some(category_id) = query.category_id else {
        return error_response(StoreError::Validation(
            "categoryId query parameter is required".to_string(),
        ));
    };
    let components = state.store.lock().unwrap().list_components(category_id);
    Json(components).into_response()
}

async fn get_component(State(state): State<Arc<AppState>>, Path(id): Path<u32>) -> Response {
    match state.store.lock().unwrap().get_component(id) {
        Ok(component) => Json(component).into_response(),
        Err(e) => error_response(e),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateComponentRequest {
    name: String,
    description: Option<String>,
    category_id: u32,
    html: String,
    #[serde(default)]
    css: String,
    #[serde(default)]
    js: String,
    #[serde(default)]
    tags: Vec<String>,
}

async fn create_component(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateComponentRequest>,
) -> Response {
    let new = NewComponent {
        name: request.name,
        description: request.description.filter(|d| !d.is_empty()),
        category_id: request.category_id,
        fragments: Fragments::new(request.html, request.css, request.js),
        tags: request.tags,
    };

    match state.store.lock().unwrap().create_component(new) {
        Ok(component) => (StatusCode::CREATED, Json(component)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn update_component(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Json(patch): Json<FragmentPatch>,
) -> Response {
    match state.store.lock().unwrap().update_component(id, &patch) {
        Ok(component) => Json(component).into_response(),
        Err(e) => error_response(e),
    }
}

/// Serve a component's live preview. The compiled document goes into a
/// sandboxed iframe, never into the hosting page, so user scripts stay
/// isolated from the admin UI.
async fn preview_component(State(state): State<Arc<AppState>>, Path(id): Path<u32>) -> Response {
    let component = match state.store.lock().unwrap().get_component(id) {
        Ok(component) => component,
        Err(e) => return error_response(e),
    };

    let document = compile(&component.fragments);
    let page = format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <title>Component Preview</title>\n\
         <style>html, body {{ margin: 0; height: 100%; }}</style>\n\
         </head>\n\
         <body>\n\
         {}\n\
         </body>\n\
         </html>\n",
        sandbox_embed(&document)
    );
    Html(page).into_response()
}

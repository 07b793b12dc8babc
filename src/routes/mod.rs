use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::{any::Any, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{
    catalog::CatalogStore,
    config::Config,
    error::AppError,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
};

pub mod recommendations;
pub mod titles;

/// Shared application state
pub struct AppState {
    pub catalog: CatalogStore,
    pub config: Config,
}

impl AppState {
    pub fn new(catalog: CatalogStore, config: Config) -> Self {
        Self { catalog, config }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/recommend", post(recommendations::recommend))
        .route("/search", get(titles::search))
        .route("/autocomplete", get(titles::autocomplete))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                // Request ID wraps the panic handler so 500s carry the header too
                .layer(middleware::from_fn(request_id_middleware))
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}

/// Health check endpoint, reporting the catalog once it is loaded
async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    let catalog = state.catalog.loaded().map(|catalog| catalog.info());
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "catalog": catalog })),
    )
}

/// Renders a handler panic as the regular structured 500 body
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown error".to_string()
    };

    AppError::Internal(details).into_response()
}

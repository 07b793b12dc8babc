use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::Movie,
    routes::AppState,
    services::title_search,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub movies: Vec<Movie>,
    pub total: usize,
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct AutocompleteResponse {
    pub movies: Vec<Movie>,
}

/// Handler for title search endpoint
pub async fn search(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<Json<SearchResponse>> {
    let Query(params) = params.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::MissingParameter("Query parameter 'q' is required".to_string()))?;

    let catalog = state.catalog.get().await;
    let movies: Vec<Movie> =
        title_search::find_by_title_substring(catalog.movies(), query, state.config.search_limit)
            .into_iter()
            .cloned()
            .collect();

    tracing::info!(
        request_id = %request_id,
        query = %query,
        results = movies.len(),
        catalog_size = catalog.len(),
        "Title search completed"
    );

    Ok(Json(SearchResponse {
        total: movies.len(),
        query: query.to_string(),
        movies,
    }))
}

/// Handler for autocomplete endpoint. A missing or empty `q` matches every title.
pub async fn autocomplete(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<Json<AutocompleteResponse>> {
    let Query(params) = params.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    // Not trimmed: an empty query lists the start of the catalog
    let query = params.q.unwrap_or_default();

    let catalog = state.catalog.get().await;
    let movies = title_search::find_by_title_substring(
        catalog.movies(),
        &query,
        state.config.autocomplete_limit,
    )
    .into_iter()
    .cloned()
    .collect();

    Ok(Json(AutocompleteResponse { movies }))
}

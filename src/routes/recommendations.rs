use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::Movie,
    routes::AppState,
    services::{recommendations, title_search},
};

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub count: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Movie>,
}

/// Resolves the requested result count: default when absent, clamped to the
/// configured maximum, rejected when not positive.
fn resolve_count(requested: Option<i64>, config: &Config) -> AppResult<usize> {
    match requested {
        None => Ok(config.default_recommendation_count),
        Some(n) if n < 1 => Err(AppError::InvalidInput(
            "count must be a positive integer".to_string(),
        )),
        Some(n) => Ok(usize::try_from(n)
            .unwrap_or(usize::MAX)
            .min(config.max_recommendation_count)),
    }
}

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Json(request) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    let title = request
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::MissingParameter("Movie title is required".to_string()))?;
    let count = resolve_count(request.count, &state.config)?;

    // First request after startup may still be waiting on the catalog load
    let catalog = state.catalog.get().await;
    let target = title_search::resolve_target(catalog.movies(), title).ok_or_else(|| {
        tracing::info!(request_id = %request_id, title = %title, "Recommendation target not found");
        AppError::NotFound("Movie not found".to_string())
    })?;

    let recommendations = recommendations::recommend(target, catalog.movies(), count);

    tracing::info!(
        request_id = %request_id,
        title = %title,
        target_id = target.id,
        count,
        results = recommendations.len(),
        "Recommendations generated"
    );

    Ok(Json(RecommendationResponse { recommendations }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_count() {
        let config = Config::default();
        assert_eq!(resolve_count(None, &config).unwrap(), 20);
        assert_eq!(resolve_count(Some(5), &config).unwrap(), 5);
        assert_eq!(resolve_count(Some(10_000), &config).unwrap(), 100);
        assert!(matches!(resolve_count(Some(0), &config), Err(AppError::InvalidInput(_))));
        assert!(matches!(resolve_count(Some(-3), &config), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_request_fields_are_optional() {
        let request: RecommendationRequest = serde_json::from_str("{}").unwrap();
        assert!(request.title.is_none());
        assert!(request.count.is_none());

        let request: RecommendationRequest =
            serde_json::from_str(r#"{"title": "Heat", "count": null}"#).unwrap();
        assert_eq!(request.title.as_deref(), Some("Heat"));
        assert!(request.count.is_none());
    }
}

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{Product, RecommendationResult},
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub query: String,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Lists the catalog in id order
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.products().to_vec())
}

/// Handler for recommendations endpoint
///
/// Rejects malformed bodies and blank queries with 400; everything past
/// validation answers 200, with the degraded result when the model call fails.
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<RecommendationResult>> {
    let Json(request) = payload?;
    let query = request.query.trim();
    if query.is_empty() {
        return Err(AppError::InvalidInput("Query cannot be empty".to_string()));
    }

    tracing::info!(
        request_id = %request_id,
        query_len = query.len(),
        "Processing recommendation request"
    );

    let result = state.recommender.recommend(query).await;

    tracing::info!(
        request_id = %request_id,
        recommendations = result.recommendations.len(),
        "Recommendation request completed"
    );

    Ok(Json(result))
}

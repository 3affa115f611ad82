use std::sync::Arc;

use crate::{
    catalog::Catalog,
    error::AppResult,
    models::{ModelRecommendation, Recommendation, RecommendationResult},
    services::{model_output::parse_model_output, prompt::build_prompt, providers::LlmProvider},
};

/// Query-to-recommendation pipeline
///
/// Built once at startup and shared. Calls are independent: concurrent
/// queries are neither serialized nor cancelled, and each caller gets the
/// result of its own request.
#[derive(Clone)]
pub struct Recommender {
    provider: Arc<dyn LlmProvider>,
    catalog: Arc<Catalog>,
}

impl Recommender {
    pub fn new(provider: Arc<dyn LlmProvider>, catalog: Arc<Catalog>) -> Self {
        Self { provider, catalog }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Recommends catalog products for a free-text query
    ///
    /// The query must already be trimmed and non-empty. Never fails: any error
    /// yields the degraded result naming the provider.
    pub async fn recommend(&self, query: &str) -> RecommendationResult {
        match self.try_recommend(query).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    provider = self.provider.name(),
                    "Recommendation failed, returning degraded result"
                );
                RecommendationResult::degraded(self.provider.name())
            }
        }
    }

    async fn try_recommend(&self, query: &str) -> AppResult<RecommendationResult> {
        tracing::info!(
            query_len = query.len(),
            catalog_size = self.catalog.len(),
            provider = self.provider.name(),
            "Requesting recommendations"
        );

        let prompt = build_prompt(query, &self.catalog)?;
        let raw = self.provider.generate(&prompt).await?;
        let output = parse_model_output(&raw)?;

        let returned = output.recommendations.len();
        let recommendations = resolve_and_rank(&self.catalog, output.recommendations);

        tracing::info!(
            returned,
            resolved = recommendations.len(),
            "Recommendations resolved"
        );

        Ok(RecommendationResult {
            explanation: output.explanation,
            recommendations,
        })
    }
}

/// Joins model entries with catalog products and sorts by score, best first
///
/// Entries whose id names no catalog product are dropped without error.
pub fn resolve_and_rank(
    catalog: &Catalog,
    entries: Vec<ModelRecommendation>,
) -> Vec<Recommendation> {
    let mut dropped = Vec::new();

    let mut resolved: Vec<Recommendation> = entries
        .into_iter()
        .filter_map(|entry| {
            match entry.id.as_product_id().and_then(|id| catalog.get(id)) {
                Some(product) => Some(Recommendation {
                    product: product.clone(),
                    score: entry.score,
                    reason: entry.reason,
                }),
                None => {
                    dropped.push(entry.id.to_string());
                    None
                }
            }
        })
        .collect();

    if !dropped.is_empty() {
        tracing::debug!(
            dropped_ids = %dropped.join(", "),
            "Dropped recommendations for unknown products"
        );
    }

    resolved.sort_by(|a, b| b.score.total_cmp(&a.score));
    resolved
}

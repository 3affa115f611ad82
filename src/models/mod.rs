use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod product;

pub use product::{Product, ProductEntry, ProductId};

/// Product reference as written by the model
///
/// Kept as raw JSON: the prompt's format example shows `"id": "productId"`, so
/// models return integers, integers inside strings, floats like `1.0`, or
/// `null`. Whatever the shape, a reference that names no product only drops
/// its own entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ModelProductRef(pub serde_json::Value);

impl ModelProductRef {
    /// Catalog id this reference points at, if it names one at all
    pub fn as_product_id(&self) -> Option<ProductId> {
        match &self.0 {
            serde_json::Value::Number(number) => {
                if let Some(index) = number.as_u64() {
                    return ProductId::try_from(index).ok();
                }
                // Whole-number floats such as 1.0
                number
                    .as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                    .filter(|f| *f <= ProductId::MAX as f64)
                    .map(|f| f as ProductId)
            }
            serde_json::Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for ModelProductRef {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl Display for ModelProductRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One raw recommendation entry from the model output
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelRecommendation {
    #[serde(default)]
    pub id: ModelProductRef,
    pub score: f64,
    #[serde(default)]
    pub reason: String,
}

/// The JSON document the model is instructed to return
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelOutput {
    pub explanation: String,
    pub recommendations: Vec<ModelRecommendation>,
}

/// A model recommendation joined with its catalog product
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub product: Product,
    pub score: f64,
    pub reason: String,
}

/// Ranked recommendations for one query, best first
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationResult {
    pub explanation: String,
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationResult {
    /// Fallback returned when any pipeline step fails
    pub fn degraded(provider_name: &str) -> Self {
        Self {
            explanation: format!("Error calling {}", provider_name),
            recommendations: Vec::new(),
        }
    }
}

// ============================================================================
// Gemini API Types
// ============================================================================

/// Request body for POST /models/{model}:generateContent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateContentRequest {
    pub contents: Vec<GeminiContent>,
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text part
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response body of generateContent; every level may be missing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct GeminiErrorResponse {
    pub error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct GeminiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

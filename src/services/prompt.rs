use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
};

const ROLE: &str = "You are a product recommendation assistant.";

/// Output contract the model must follow; parsed by `model_output`
const OUTPUT_FORMAT: &str = r#"Return ONLY valid JSON, no markdown, no code fences, no extra text.
The JSON object must have exactly these two top-level fields:
{
  "explanation": "string",
  "recommendations": [
    { "id": <catalog product id as an integer>, "score": <number between 0 and 1>, "reason": "string" }
  ]
}
Order recommendations from best to worst match. Only use ids that appear in the catalog."#;

/// Builds the single-turn prompt for a user query
///
/// The full catalog is embedded as JSON, ids included, so the model can refer
/// to products by id.
pub fn build_prompt(query: &str, catalog: &Catalog) -> AppResult<String> {
    let catalog_json = serde_json::to_string(catalog.products())
        .map_err(|e| AppError::Internal(format!("Failed to serialize catalog: {}", e)))?;

    Ok(format!(
        "{}\nThe user asked: \"{}\".\nHere is the product catalog in JSON: {}\n\n{}\n",
        ROLE, query, catalog_json, OUTPUT_FORMAT
    ))
}

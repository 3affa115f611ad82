/// Parsing of the model's free-text answer into a typed `ModelOutput`
///
/// The model is told to reply with bare JSON but often wraps it in markdown
/// fences anyway. Parsing never decides what happens on failure; callers get a
/// `ModelOutputError` and pick their own degradation.
use thiserror::Error;

use crate::models::ModelOutput;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelOutputError {
    /// Text is not JSON at all
    #[error("model output is not valid JSON: {0}")]
    Json(String),

    /// JSON, but not the object the prompt asked for
    #[error("model output has unexpected shape: {0}")]
    Shape(String),
}

/// Removes every markdown fence marker (```json or ```) and trims
pub fn sanitize(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Sanitizes and parses raw model text
pub fn parse_model_output(raw: &str) -> Result<ModelOutput, ModelOutputError> {
    let cleaned = sanitize(raw);

    let value: serde_json::Value =
        serde_json::from_str(&cleaned).map_err(|e| ModelOutputError::Json(e.to_string()))?;

    serde_json::from_value(value).map_err(|e| ModelOutputError::Shape(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModelProductRef;

    const PLAIN: &str = r#"{"explanation":"Both fit","recommendations":[{"id":1,"score":0.6,"reason":"lighter"},{"id":0,"score":0.9,"reason":"cheaper"}]}"#;

    #[test]
    fn test_sanitize_plain_text_is_trimmed() {
        assert_eq!(sanitize("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_sanitize_json_fence() {
        assert_eq!(sanitize("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }

    #[test]
    fn test_sanitize_bare_fence_with_whitespace() {
        assert_eq!(sanitize("  \n```\n{\"a\": 1}\n```\n  "), "{\"a\": 1}");
    }

    #[test]
    fn test_parse_plain() {
        let output = parse_model_output(PLAIN).unwrap();

        assert_eq!(output.explanation, "Both fit");
        assert_eq!(output.recommendations.len(), 2);
        assert_eq!(output.recommendations[0].id, ModelProductRef::from(serde_json::json!(1)));
        assert_eq!(output.recommendations[0].score, 0.6);
        assert_eq!(output.recommendations[1].reason, "cheaper");
    }

    #[test]
    fn test_fenced_parses_like_unfenced() {
        let fenced = format!("```json\n{}\n```", PLAIN);
        assert_eq!(
            parse_model_output(&fenced).unwrap(),
            parse_model_output(PLAIN).unwrap()
        );

        let bare_fence = format!("```\n{}\n```", PLAIN);
        assert_eq!(
            parse_model_output(&bare_fence).unwrap(),
            parse_model_output(PLAIN).unwrap()
        );
    }

    #[test]
    fn test_prose_is_json_error() {
        let result = parse_model_output("Sure! Here are some laptops you might like.");
        assert!(matches!(result, Err(ModelOutputError::Json(_))));
    }

    #[test]
    fn test_empty_object_is_shape_error() {
        let result = parse_model_output("{}");
        assert!(matches!(result, Err(ModelOutputError::Shape(_))));
    }

    #[test]
    fn test_missing_recommendations_is_shape_error() {
        let result = parse_model_output(r#"{"explanation": "nothing"}"#);
        assert!(matches!(result, Err(ModelOutputError::Shape(_))));
    }

    #[test]
    fn test_non_numeric_score_is_shape_error() {
        let result = parse_model_output(
            r#"{"explanation": "x", "recommendations": [{"id": 0, "score": "high", "reason": "r"}]}"#,
        );
        assert!(matches!(result, Err(ModelOutputError::Shape(_))));
    }

    #[test]
    fn test_empty_recommendations_is_valid() {
        let output =
            parse_model_output(r#"{"explanation": "Nothing matches", "recommendations": []}"#)
                .unwrap();
        assert_eq!(output.explanation, "Nothing matches");
        assert!(output.recommendations.is_empty());
    }
}

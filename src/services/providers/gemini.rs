/// Google Gemini provider
///
/// Calls `POST {api_url}/models/{model}:generateContent?key={api_key}` with a
/// single-turn `contents` envelope and returns the first candidate's first
/// text part.
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{GeminiErrorResponse, GenerateContentRequest, GenerateContentResponse},
    services::providers::LlmProvider,
};
use reqwest::{Client as HttpClient, StatusCode};

/// Stand-in output when the response carries no text
const EMPTY_OUTPUT: &str = "{}";

#[derive(Clone)]
pub struct GeminiProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: String, api_url: String, model: String) -> AppResult<Self> {
        if api_key.trim().is_empty() {
            return Err(AppError::Config("Gemini API key is empty".to_string()));
        }

        Ok(Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            model,
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.gemini_api_key.clone(),
            config.gemini_api_url.clone(),
            config.gemini_model.clone(),
        )
    }

    /// generateContent URL, without the key
    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }

    /// Builds the error for a non-2xx response, preferring the API's own message
    fn api_error(status: StatusCode, body: &str) -> AppError {
        let message = serde_json::from_str::<GeminiErrorResponse>(body)
            .ok()
            .and_then(|e| e.error.message)
            .unwrap_or_else(|| body.to_string());

        AppError::ExternalApi(format!(
            "Gemini API returned status {}: {}",
            status, message
        ))
    }

    fn extract_text(response: &GenerateContentResponse) -> String {
        response
            .first_text()
            .unwrap_or(EMPTY_OUTPUT)
            .to_string()
    }
}

#[async_trait::async_trait]
impl LlmProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = GenerateContentRequest::from_prompt(prompt);

        // Errors are stripped of their URL, which carries the key
        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::HttpClient(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::api_error(status, &body));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::HttpClient(e.without_url()))?;
        tracing::debug!(response = %response_text, "Raw Gemini API response");

        let body: GenerateContentResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                tracing::error!(
                    error = %e,
                    response = %response_text,
                    "Failed to deserialize Gemini response"
                );
                AppError::ExternalApi(format!("Failed to parse Gemini response: {}", e))
            })?;

        let text = Self::extract_text(&body);

        tracing::info!(
            model = %self.model,
            output_len = text.len(),
            provider = "gemini",
            "Generation completed"
        );

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "Gemini"
    }
}

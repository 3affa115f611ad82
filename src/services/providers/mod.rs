/// Text-generation provider abstraction
///
/// The recommendation pipeline only needs "send a prompt, get text back", so
/// each hosted LLM sits behind this trait and tests can swap in a mock.
use crate::error::AppResult;

pub mod gemini;

pub use gemini::GeminiProvider;

/// Trait for hosted LLM text-generation endpoints
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    /// Sends a single prompt and returns the model's raw text output
    ///
    /// A response without any text yields `"{}"`. Transport failures and
    /// non-2xx statuses are errors.
    async fn generate(&self, prompt: &str) -> AppResult<String>;

    /// Provider name for logging and the degraded-result message
    fn name(&self) -> &'static str;
}

//! Product advisor service
//!
//! Turns a free-text shopping query into ranked catalog recommendations by
//! asking a hosted LLM (Gemini) and reconciling its answer with the local
//! product catalog.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Product, Recommendation, RecommendationResult};
pub use services::Recommender;

pub mod model_output;
pub mod prompt;
pub mod providers;
pub mod recommendations;

pub use recommendations::Recommender;

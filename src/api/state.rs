use std::sync::Arc;

use crate::{catalog::Catalog, services::Recommender};

/// Shared application state
///
/// Everything here is read-only after startup, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// The catalog is shared with the recommender rather than copied
    pub fn new(recommender: Recommender) -> Self {
        let catalog = Arc::clone(recommender.catalog());
        Self {
            recommender: Arc::new(recommender),
            catalog,
        }
    }
}

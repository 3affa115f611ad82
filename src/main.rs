use std::sync::Arc;

use product_advisor::{
    api::{create_router, AppState},
    services::providers::GeminiProvider,
    Catalog, Config, Recommender,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // A bad catalog is fatal
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::load()?,
    };
    tracing::info!(products = catalog.len(), "Catalog loaded");

    let provider = GeminiProvider::from_config(&config)?;
    let recommender = Recommender::new(Arc::new(provider), Arc::new(catalog));

    let app = create_router(AppState::new(recommender));

    // Start the server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, model = %config.gemini_model, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}

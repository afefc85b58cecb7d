//! Service entry point.

use sitefront::{app_router, AppConfig, AppState, DocumentStore, PgDocumentStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sitefront=info".parse()?))
        .init();

    let config = AppConfig::from_env();
    let store = build_store(&config);
    let state = AppState::new(config.clone(), store);
    let app = app_router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Connect the document store lazily; a missing or invalid configuration
/// degrades to running without a store instead of aborting startup.
fn build_store(config: &AppConfig) -> Option<Arc<dyn DocumentStore>> {
    match (&config.database_url, &config.database_name) {
        (Some(url), Some(name)) => match PgDocumentStore::connect_lazy(url, name) {
            Ok(store) => Some(Arc::new(store)),
            Err(e) => {
                tracing::warn!("document store unavailable: {}", e);
                None
            }
        },
        _ => {
            tracing::warn!("DATABASE_URL or DATABASE_NAME not set; running without a document store");
            None
        }
    }
}

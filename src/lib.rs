//! Sitefront: content backend for a single-tenant marketing site.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod schema;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::app_router;
pub use schema::{Company, ContactMessage, ProcessStep, Record, Service};
pub use state::AppState;
pub use store::{DocumentStore, MemoryStore, PgDocumentStore};

//! Route table and service identity endpoint.

use crate::handlers::{company, contact, diagnostics, process, service};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Serialize)]
struct RootBody {
    name: &'static str,
    status: &'static str,
}

async fn root() -> Json<RootBody> {
    Json(RootBody {
        name: env!("CARGO_PKG_NAME"),
        status: "ok",
    })
}

/// Build the full application router. CORS is wide open on purpose: the
/// public site is served from a different origin and sends credentials.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/company", get(company::read).post(company::create))
        .route("/api/services", get(service::read).post(service::create))
        .route("/api/process", get(process::read).post(process::create))
        .route("/api/contact", post(contact::create))
        .route("/test", get(diagnostics::report))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

//! Connectivity diagnostics. The endpoint never fails at the transport
//! layer; every internal problem is rendered into the response body.

use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};

const MAX_CAUSE_LEN: usize = 50;
const MAX_COLLECTIONS: usize = 10;

pub async fn report(State(state): State<AppState>) -> Json<Value> {
    let mut database = "not configured".to_string();
    let mut connection_status = "Not Connected";
    let mut collections: Vec<String> = Vec::new();

    if let Some(store) = &state.store {
        match store.collection_names().await {
            Ok(names) => {
                database = "connected".to_string();
                connection_status = "Connected";
                collections = names.into_iter().take(MAX_COLLECTIONS).collect();
            }
            Err(e) => {
                database = format!("error: {}", truncate(&e.to_string(), MAX_CAUSE_LEN));
            }
        }
    }

    Json(json!({
        "backend": "running",
        "database": database,
        "database_url": presence(state.config.database_url.is_some()),
        "database_name": presence(state.config.database_name.is_some()),
        "connection_status": connection_status,
        "collections": collections,
        "checked_at": chrono::Utc::now().to_rfc3339(),
    }))
}

fn presence(set: bool) -> &'static str {
    if set {
        "set"
    } else {
        "not set"
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

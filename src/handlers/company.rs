//! Company profile endpoints.

use crate::error::AppError;
use crate::schema::{Company, Record};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::Value;

/// At most one profile is returned: the first by insertion order. The store
/// enforces no uniqueness, so later profiles are simply never listed.
pub async fn read(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let docs = state
        .store()?
        .get_documents(Company::COLLECTION, Some(1))
        .await?;
    Ok(Json(docs))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<super::Inserted>, AppError> {
    let record: Company = super::decode(body)?;
    let inserted_id = state
        .store()?
        .create_document(Company::COLLECTION, serde_json::to_value(&record)?)
        .await?;
    Ok(Json(super::Inserted { inserted_id }))
}

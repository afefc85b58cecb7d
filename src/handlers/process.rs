//! Process step endpoints.

use crate::error::AppError;
use crate::schema::{ProcessStep, Record};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::Value;

/// Steps sorted by `order` ascending. Documents without an `order` sort
/// last; the sort is stable, so ties keep insertion order.
pub async fn read(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let mut docs = state
        .store()?
        .get_documents(ProcessStep::COLLECTION, None)
        .await?;
    docs.sort_by_key(step_order);
    Ok(Json(docs))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<super::Inserted>, AppError> {
    let record: ProcessStep = super::decode(body)?;
    let inserted_id = state
        .store()?
        .create_document(ProcessStep::COLLECTION, serde_json::to_value(&record)?)
        .await?;
    Ok(Json(super::Inserted { inserted_id }))
}

fn step_order(doc: &Value) -> i64 {
    doc.get("order").and_then(Value::as_i64).unwrap_or(i64::MAX)
}

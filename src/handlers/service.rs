//! Service catalogue endpoints.

use crate::error::AppError;
use crate::schema::{Record, Service};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::Value;

/// All services, in insertion order.
pub async fn read(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let docs = state
        .store()?
        .get_documents(Service::COLLECTION, None)
        .await?;
    Ok(Json(docs))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<super::Inserted>, AppError> {
    let record: Service = super::decode(body)?;
    let inserted_id = state
        .store()?
        .create_document(Service::COLLECTION, serde_json::to_value(&record)?)
        .await?;
    Ok(Json(super::Inserted { inserted_id }))
}

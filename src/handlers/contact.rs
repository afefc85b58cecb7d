//! Contact message intake. Write-only: there is no read endpoint.

use crate::error::AppError;
use crate::schema::{ContactMessage, Record};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

pub const ACKNOWLEDGMENT: &str = "Thanks for reaching out!";

#[derive(Serialize)]
pub struct ContactReceipt {
    pub message: &'static str,
    pub ticket_id: String,
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ContactReceipt>, AppError> {
    let record: ContactMessage = super::decode(body)?;
    let ticket_id = state
        .store()?
        .create_document(ContactMessage::COLLECTION, serde_json::to_value(&record)?)
        .await?;
    tracing::info!(ticket_id = %ticket_id, "contact message received");
    Ok(Json(ContactReceipt {
        message: ACKNOWLEDGMENT,
        ticket_id,
    }))
}

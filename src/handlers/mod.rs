//! HTTP handlers for the content collections, contact intake, and diagnostics.

pub mod company;
pub mod contact;
pub mod diagnostics;
pub mod process;
pub mod service;

use crate::error::AppError;
use crate::schema::Record;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Response body for every create endpoint except contact.
#[derive(Serialize)]
pub struct Inserted {
    pub inserted_id: String,
}

/// Decode a request body into a record and run its constraint checks.
pub(crate) fn decode<T: Record + DeserializeOwned>(body: Value) -> Result<T, AppError> {
    if !body.is_object() {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    }
    let record: T = serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))?;
    record.validate()?;
    Ok(record)
}

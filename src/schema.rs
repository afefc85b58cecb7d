//! Entity records and boundary validation.
//!
//! Each record type maps to one collection in the document store. Required
//! fields are rejected at decode time when missing or wrong-typed; format
//! constraints are checked by [`Record::validate`]. Validation happens only
//! at the request boundary; stored documents are never re-checked on read.

use crate::error::AppError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));

/// A record that can be validated and stored in its collection.
pub trait Record: Serialize {
    const COLLECTION: &'static str;

    /// Check format constraints. All violations are reported at once.
    fn validate(&self) -> Result<(), AppError>;
}

/// Company profile. Singleton in practice: the read endpoint returns at most
/// one, by insertion order, but nothing prevents storing several.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub hero_image: Option<String>,
}

impl Record for Company {
    const COLLECTION: &'static str = "company";

    fn validate(&self) -> Result<(), AppError> {
        let mut problems = Vec::new();
        if let Some(email) = &self.email {
            check_email("email", email, &mut problems);
        }
        collect(problems)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub summary: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Record for Service {
    const COLLECTION: &'static str = "service";

    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// One step of the engagement process. `order` drives render order but is
/// neither unique nor contiguous.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessStep {
    pub order: i64,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl Record for ProcessStep {
    const COLLECTION: &'static str = "processstep";

    fn validate(&self) -> Result<(), AppError> {
        let mut problems = Vec::new();
        check_minimum("order", self.order, 1, &mut problems);
        collect(problems)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Record for ContactMessage {
    const COLLECTION: &'static str = "contactmessage";

    fn validate(&self) -> Result<(), AppError> {
        let mut problems = Vec::new();
        check_email("email", &self.email, &mut problems);
        check_min_length("message", &self.message, 5, &mut problems);
        collect(problems)
    }
}

fn check_email(field: &str, value: &str, problems: &mut Vec<String>) {
    if !EMAIL_RE.is_match(value) {
        problems.push(format!("{} must be a valid email", field));
    }
}

fn check_min_length(field: &str, value: &str, min: usize, problems: &mut Vec<String>) {
    if value.len() < min {
        problems.push(format!("{} must be at least {} characters", field, min));
    }
}

fn check_minimum(field: &str, value: i64, min: i64, problems: &mut Vec<String>) {
    if value < min {
        problems.push(format!("{} must be at least {}", field, min));
    }
}

fn collect(problems: Vec<String>) -> Result<(), AppError> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(problems.join("; ")))
    }
}

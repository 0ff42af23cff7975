//! Path parameter extractors
//!
//! Ids travel as strings on the wire (they are serialized that way in
//! responses), so path structs parse them back to i64 explicitly.

use serde::Deserialize;

use crate::response::ApiError;

/// Path parameters with question_id
#[derive(Debug, Deserialize)]
pub struct QuestionIdPath {
    pub question_id: String,
}

impl QuestionIdPath {
    /// Parse question_id as i64
    pub fn question_id(&self) -> Result<i64, ApiError> {
        parse_id(&self.question_id, "question_id")
    }
}

/// Path parameters with answer_id
#[derive(Debug, Deserialize)]
pub struct AnswerIdPath {
    pub answer_id: String,
}

impl AnswerIdPath {
    /// Parse answer_id as i64
    pub fn answer_id(&self) -> Result<i64, ApiError> {
        parse_id(&self.answer_id, "answer_id")
    }
}

/// Path parameter naming the OAuth2 provider
#[derive(Debug, Deserialize)]
pub struct ProviderPath {
    pub provider: String,
}

impl ProviderPath {
    /// The raw provider name; the service validates it
    pub fn provider(&self) -> &str {
        &self.provider
    }
}

fn parse_id(raw: &str, name: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::invalid_path(format!("Invalid {name} format")))
}

//! Question entity - an interview question with a curated default answer

use chrono::{DateTime, Utc};

/// Interview question.
///
/// `lgtm_count` is a denormalized aggregate that must always equal the number
/// of live reactions referencing this question. `default_answer` tracks the
/// content of the currently selected answer, if a selection has been made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub default_answer: Option<String>,
    pub category_id: Option<i64>,
    pub keyword_ids: Vec<i64>,
    pub lgtm_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

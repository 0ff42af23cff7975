//! Answer entity - a user-submitted answer to a question

use chrono::{DateTime, Utc};

/// User answer to an interview question.
///
/// At most one answer per question may have `is_selected = true`; the
/// selected answer's content is mirrored into the question's
/// `default_answer`. `lgtm_count` is denormalized and must match the live
/// reaction rows referencing this answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub id: i64,
    pub content: String,
    pub question_id: i64,
    pub user_id: i64,
    pub is_anonymous: bool,
    pub is_selected: bool,
    pub lgtm_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//! Answer database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for answers table
#[derive(Debug, Clone, FromRow)]
pub struct AnswerModel {
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

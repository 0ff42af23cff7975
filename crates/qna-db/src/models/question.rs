//! Question database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the questions table.
///
/// `keyword_ids` is aggregated from the question_keywords join table with
/// `array_agg`, so every query for this model carries the full keyword set.
#[derive(Debug, Clone, FromRow)]
pub struct QuestionModel {
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

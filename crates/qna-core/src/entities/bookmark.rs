//! Bookmark entity - a user saving a question

use chrono::{DateTime, Utc};

/// A user's bookmark on a question.
///
/// At most one bookmark per (user, question) pair; its existence is the
/// toggle state, there is no counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub id: i64,
    pub user_id: i64,
    pub question_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//! Bookmark database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for bookmarks table
#[derive(Debug, Clone, FromRow)]
pub struct BookmarkModel {
    pub id: i64,
    pub user_id: i64,
    pub question_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//! Keyword entity - shared reference data tagged onto questions

use chrono::{DateTime, Utc};

/// Keyword attached to questions through a join table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

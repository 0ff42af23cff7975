//! Category entity - shared reference data for grouping questions

use chrono::{DateTime, Utc};

/// Question category (e.g. "OS", "Network").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

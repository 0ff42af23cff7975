//! Reaction entity - an LGTM on a question or answer

use chrono::{DateTime, Utc};

use crate::value_objects::ReactionTarget;

/// A single user's LGTM reaction on one target.
///
/// At most one reaction per (user, target) pair. The target enum guarantees
/// the reaction references exactly one of a question or an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: i64,
    pub user_id: i64,
    pub target: ReactionTarget,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//! Reaction target - the entity an LGTM reaction points at

use serde::{Deserialize, Serialize};
use std::fmt;

/// The single entity a reaction is attached to.
///
/// A reaction references exactly one of a question or an answer. Modeling
/// the target as a closed enum makes the "never both, never neither" rule
/// unrepresentable in the domain layer; only the database mapping can
/// violate it, and the mapper checks for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "UPPERCASE")]
pub enum ReactionTarget {
    Question(i64),
    Answer(i64),
}

impl ReactionTarget {
    /// Id of the referenced question or answer.
    #[must_use]
    pub fn id(&self) -> i64 {
        match self {
            Self::Question(id) | Self::Answer(id) => *id,
        }
    }

    #[must_use]
    pub fn is_question(&self) -> bool {
        matches!(self, Self::Question(_))
    }

    /// Split into the nullable (question_id, answer_id) column pair.
    #[must_use]
    pub fn into_columns(self) -> (Option<i64>, Option<i64>) {
        match self {
            Self::Question(id) => (Some(id), None),
            Self::Answer(id) => (None, Some(id)),
        }
    }

    /// Rebuild from the nullable column pair; `None` when the row violates
    /// the exactly-one rule.
    #[must_use]
    pub fn from_columns(question_id: Option<i64>, answer_id: Option<i64>) -> Option<Self> {
        match (question_id, answer_id) {
            (Some(id), None) => Some(Self::Question(id)),
            (None, Some(id)) => Some(Self::Answer(id)),
            _ => None,
        }
    }
}

impl fmt::Display for ReactionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Question(id) => write!(f, "question {id}"),
            Self::Answer(id) => write!(f, "answer {id}"),
        }
    }
}

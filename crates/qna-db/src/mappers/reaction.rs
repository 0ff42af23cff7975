//! Reaction model -> entity mapper

use qna_core::entities::Reaction;
use qna_core::error::DomainError;
use qna_core::value_objects::ReactionTarget;

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity.
///
/// A row must reference exactly one of a question or an answer; the CHECK
/// constraint guarantees this, and the mapper re-validates on the way out.
impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let target = ReactionTarget::from_columns(model.question_id, model.answer_id)
            .ok_or(DomainError::InvalidReaction)?;

        Ok(Reaction {
            id: model.id,
            user_id: model.user_id,
            target,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

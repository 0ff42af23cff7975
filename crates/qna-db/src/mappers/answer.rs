//! Answer model -> entity mapper

use qna_core::entities::Answer;

use crate::models::AnswerModel;

impl From<AnswerModel> for Answer {
    fn from(model: AnswerModel) -> Self {
        Answer {
            id: model.id,
            content: model.content,
            question_id: model.question_id,
            user_id: model.user_id,
            is_anonymous: model.is_anonymous,
            is_selected: model.is_selected,
            lgtm_count: model.lgtm_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

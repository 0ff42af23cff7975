//! Question model -> entity mapper

use qna_core::entities::Question;

use crate::models::QuestionModel;

impl From<QuestionModel> for Question {
    fn from(model: QuestionModel) -> Self {
        Question {
            id: model.id,
            title: model.title,
            content: model.content,
            default_answer: model.default_answer,
            category_id: model.category_id,
            keyword_ids: model.keyword_ids,
            lgtm_count: model.lgtm_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

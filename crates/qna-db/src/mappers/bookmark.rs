//! Bookmark model -> entity mapper

use qna_core::entities::Bookmark;

use crate::models::BookmarkModel;

impl From<BookmarkModel> for Bookmark {
    fn from(model: BookmarkModel) -> Self {
        Bookmark {
            id: model.id,
            user_id: model.user_id,
            question_id: model.question_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

//! Bookmark service
//!
//! Lists a user's bookmarked questions, optionally filtered by category.

use qna_core::traits::PageRequest;
use qna_core::value_objects::ReactionTarget;
use tracing::instrument;

use crate::dto::{BookmarkResponse, PageResponse, QuestionSummaryResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Bookmark service
pub struct BookmarkService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BookmarkService<'a> {
    /// Create a new BookmarkService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The user's bookmarks, newest first, each with its question summary
    #[instrument(skip(self))]
    pub async fn list_bookmarks(
        &self,
        user_id: i64,
        category_id: Option<i64>,
        page: PageRequest,
    ) -> ServiceResult<PageResponse<BookmarkResponse>> {
        let bookmarks = match category_id {
            Some(category_id) => {
                self.ctx
                    .category_repo()
                    .find_by_id(category_id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("Category", category_id.to_string()))?;

                self.ctx
                    .bookmark_repo()
                    .find_by_user_and_category(user_id, category_id, page)
                    .await?
            }
            None => self.ctx.bookmark_repo().find_by_user(user_id, page).await?,
        };

        let mut data = Vec::with_capacity(bookmarks.items.len());
        for bookmark in &bookmarks.items {
            // Bookmarked rows reference live questions; a missing one means
            // it was deleted between the two reads, so skip it.
            let Some(question) = self
                .ctx
                .question_repo()
                .find_by_id(bookmark.question_id)
                .await?
            else {
                continue;
            };

            let lgtm_reacted = self
                .ctx
                .reaction_repo()
                .exists(user_id, ReactionTarget::Question(question.id))
                .await?;

            data.push(BookmarkResponse {
                id: bookmark.id.to_string(),
                question: QuestionSummaryResponse::new(&question, true, lgtm_reacted),
                created_at: bookmark.created_at,
            });
        }

        Ok(PageResponse::new(
            data,
            bookmarks.page,
            bookmarks.size,
            bookmarks.total,
        ))
    }
}

//! Question service
//!
//! Question browsing plus the per-question engagement toggles (bookmark,
//! lgtm reaction). Views are viewer-dependent: the same question carries
//! different `bookmarked` / `lgtm_reacted` flags per requesting user, and an
//! anonymous viewer always sees both as false.

use qna_core::traits::PageRequest;
use qna_core::value_objects::ReactionTarget;
use tracing::{info, instrument};

use crate::dto::{
    AnswerResponse, BookmarkToggleResponse, LgtmToggleResponse, PageResponse,
    QuestionDetailResponse, QuestionSummaryResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Question service
pub struct QuestionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> QuestionService<'a> {
    /// Create a new QuestionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List questions ordered by title, optionally within one category
    #[instrument(skip(self))]
    pub async fn list_questions(
        &self,
        viewer: Option<i64>,
        category_id: Option<i64>,
        page: PageRequest,
    ) -> ServiceResult<PageResponse<QuestionSummaryResponse>> {
        let questions = match category_id {
            Some(category_id) => {
                self.ctx
                    .category_repo()
                    .find_by_id(category_id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("Category", category_id.to_string()))?;

                self.ctx
                    .question_repo()
                    .list_by_category(category_id, page)
                    .await?
            }
            None => self.ctx.question_repo().list(page).await?,
        };

        let mut data = Vec::with_capacity(questions.items.len());
        for question in &questions.items {
            let (bookmarked, lgtm_reacted) = self.engagement(viewer, question.id).await?;
            data.push(QuestionSummaryResponse::new(question, bookmarked, lgtm_reacted));
        }

        Ok(PageResponse::new(
            data,
            questions.page,
            questions.size,
            questions.total,
        ))
    }

    /// Get one question with its answers
    #[instrument(skip(self))]
    pub async fn get_question(
        &self,
        viewer: Option<i64>,
        question_id: i64,
    ) -> ServiceResult<QuestionDetailResponse> {
        let question = self
            .ctx
            .question_repo()
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Question", question_id.to_string()))?;

        let (bookmarked, lgtm_reacted) = self.engagement(viewer, question.id).await?;

        let answers = self
            .ctx
            .answer_repo()
            .find_by_question(question.id)
            .await?
            .iter()
            .map(AnswerResponse::from)
            .collect();

        Ok(QuestionDetailResponse::new(
            &question,
            bookmarked,
            lgtm_reacted,
            answers,
        ))
    }

    /// Toggle the viewer's bookmark on a question
    #[instrument(skip(self))]
    pub async fn toggle_bookmark(
        &self,
        user_id: i64,
        question_id: i64,
    ) -> ServiceResult<BookmarkToggleResponse> {
        self.require_question(question_id).await?;

        let bookmarked = self.ctx.bookmark_repo().toggle(user_id, question_id).await?;

        info!(user_id, question_id, bookmarked, "Bookmark toggled");

        Ok(BookmarkToggleResponse { bookmarked })
    }

    /// Toggle the viewer's lgtm reaction on a question
    #[instrument(skip(self))]
    pub async fn toggle_lgtm(
        &self,
        user_id: i64,
        question_id: i64,
    ) -> ServiceResult<LgtmToggleResponse> {
        self.require_question(question_id).await?;

        let toggle = self
            .ctx
            .reaction_repo()
            .toggle(user_id, ReactionTarget::Question(question_id))
            .await?;

        info!(
            user_id,
            question_id,
            lgtm = toggle.active,
            lgtm_count = toggle.lgtm_count,
            "Question lgtm toggled"
        );

        Ok(LgtmToggleResponse {
            lgtm: toggle.active,
            lgtm_count: toggle.lgtm_count,
        })
    }

    async fn require_question(&self, question_id: i64) -> ServiceResult<()> {
        self.ctx
            .question_repo()
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Question", question_id.to_string()))?;
        Ok(())
    }

    /// The viewer's engagement flags for one question; anonymous viewers
    /// always read (false, false).
    async fn engagement(&self, viewer: Option<i64>, question_id: i64) -> ServiceResult<(bool, bool)> {
        let Some(user_id) = viewer else {
            return Ok((false, false));
        };

        let bookmarked = self.ctx.bookmark_repo().exists(user_id, question_id).await?;
        let lgtm_reacted = self
            .ctx
            .reaction_repo()
            .exists(user_id, ReactionTarget::Question(question_id))
            .await?;

        Ok((bookmarked, lgtm_reacted))
    }
}

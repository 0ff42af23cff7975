//! Answer service
//!
//! Answer creation, exclusive selection, and the answer-level lgtm toggle.

use qna_core::traits::NewAnswer;
use qna_core::value_objects::ReactionTarget;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{AnswerResponse, CreateAnswerRequest, LgtmToggleResponse, SelectAnswerResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Answer service
pub struct AnswerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnswerService<'a> {
    /// Create a new AnswerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an answer under a question
    #[instrument(skip(self, request))]
    pub async fn create_answer(
        &self,
        user_id: i64,
        question_id: i64,
        request: CreateAnswerRequest,
    ) -> ServiceResult<AnswerResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        self.ctx
            .question_repo()
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Question", question_id.to_string()))?;

        let answer = self
            .ctx
            .answer_repo()
            .create(&NewAnswer {
                content: request.content,
                question_id,
                user_id,
                is_anonymous: request.is_anonymous,
            })
            .await?;

        info!(user_id, question_id, answer_id = answer.id, "Answer created");

        Ok(AnswerResponse::from(&answer))
    }

    /// Exclusively select an answer for its question.
    ///
    /// Any previously selected answer is unmarked and the question's
    /// `default_answer` takes the newly selected content; the store commits
    /// all three writes atomically.
    #[instrument(skip(self))]
    pub async fn select_answer(&self, answer_id: i64) -> ServiceResult<SelectAnswerResponse> {
        let selection = self.ctx.answer_repo().select(answer_id).await?;

        info!(
            answer_id,
            question_id = selection.question_id,
            previous = ?selection.previous,
            "Answer selected"
        );

        Ok(SelectAnswerResponse {
            question_id: selection.question_id.to_string(),
            selected_answer_id: answer_id.to_string(),
            previous_answer_id: selection.previous.map(|id| id.to_string()),
        })
    }

    /// Toggle the viewer's lgtm reaction on an answer
    #[instrument(skip(self))]
    pub async fn toggle_lgtm(&self, user_id: i64, answer_id: i64) -> ServiceResult<LgtmToggleResponse> {
        self.ctx
            .answer_repo()
            .find_by_id(answer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Answer", answer_id.to_string()))?;

        let toggle = self
            .ctx
            .reaction_repo()
            .toggle(user_id, ReactionTarget::Answer(answer_id))
            .await?;

        info!(
            user_id,
            answer_id,
            lgtm = toggle.active,
            lgtm_count = toggle.lgtm_count,
            "Answer lgtm toggled"
        );

        Ok(LgtmToggleResponse {
            lgtm: toggle.active,
            lgtm_count: toggle.lgtm_count,
        })
    }
}

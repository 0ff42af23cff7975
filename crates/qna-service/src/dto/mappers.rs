//! Entity to DTO mappers
//!
//! Implements conversions from domain entities to response DTOs. Question
//! responses also carry per-viewer engagement flags, so those are built with
//! explicit constructors instead of `From`.

use qna_core::entities::{Answer, Question, User};
use qna_common::auth::TokenPair;

use super::responses::{
    AnswerResponse, CurrentUserResponse, QuestionDetailResponse, QuestionSummaryResponse,
    TokenResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            profile_image: user.profile_image.clone(),
            provider: user.provider.to_string(),
            role: user.role.to_string(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Token Mappers
// ============================================================================

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: pair.token_type,
            expires_in: pair.expires_in,
        }
    }
}

// ============================================================================
// Question Mappers
// ============================================================================

impl QuestionSummaryResponse {
    /// Build a summary for one viewer's perspective
    pub fn new(question: &Question, bookmarked: bool, lgtm_reacted: bool) -> Self {
        Self {
            id: question.id.to_string(),
            title: question.title.clone(),
            category_id: question.category_id.map(|id| id.to_string()),
            lgtm_count: question.lgtm_count,
            bookmarked,
            lgtm_reacted,
        }
    }
}

impl QuestionDetailResponse {
    /// Build a detail view for one viewer's perspective
    pub fn new(
        question: &Question,
        bookmarked: bool,
        lgtm_reacted: bool,
        answers: Vec<AnswerResponse>,
    ) -> Self {
        Self {
            id: question.id.to_string(),
            title: question.title.clone(),
            content: question.content.clone(),
            default_answer: question.default_answer.clone(),
            category_id: question.category_id.map(|id| id.to_string()),
            keyword_ids: question.keyword_ids.iter().map(ToString::to_string).collect(),
            lgtm_count: question.lgtm_count,
            bookmarked,
            lgtm_reacted,
            answers,
            created_at: question.created_at,
        }
    }
}

// ============================================================================
// Answer Mappers
// ============================================================================

impl From<&Answer> for AnswerResponse {
    fn from(answer: &Answer) -> Self {
        Self {
            id: answer.id.to_string(),
            content: answer.content.clone(),
            question_id: answer.question_id.to_string(),
            // Anonymous answers never expose their author
            user_id: if answer.is_anonymous {
                None
            } else {
                Some(answer.user_id.to_string())
            },
            is_anonymous: answer.is_anonymous,
            is_selected: answer.is_selected,
            lgtm_count: answer.lgtm_count,
            created_at: answer.created_at,
        }
    }
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        Self::from(&answer)
    }
}

//! Question handlers
//!
//! Question browsing and the per-question engagement toggles. Reads accept
//! anonymous viewers; toggles require authentication.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use qna_service::{
    BookmarkToggleResponse, LgtmToggleResponse, PageResponse, QuestionDetailResponse,
    QuestionService, QuestionSummaryResponse,
};
use serde::Deserialize;

use crate::extractors::{AuthUser, OptionalAuthUser, Pagination, QuestionIdPath};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Query parameters for listing questions
#[derive(Debug, Deserialize)]
pub struct ListQuestionsQuery {
    #[serde(default)]
    pub category_id: Option<String>,
}

impl ListQuestionsQuery {
    fn category_id(&self) -> Result<Option<i64>, ApiError> {
        self.category_id
            .as_deref()
            .map(|raw| {
                raw.parse::<i64>()
                    .map_err(|_| ApiError::invalid_query("Invalid category_id format"))
            })
            .transpose()
    }
}

/// List questions, optionally filtered by category
///
/// GET /questions
pub async fn list_questions(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Query(query): Query<ListQuestionsQuery>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PageResponse<QuestionSummaryResponse>>> {
    let service = QuestionService::new(state.service_context());
    let response = service
        .list_questions(viewer.user_id(), query.category_id()?, page)
        .await?;
    Ok(Json(response))
}

/// Get one question with its answers
///
/// GET /questions/:question_id
pub async fn get_question(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(path): Path<QuestionIdPath>,
) -> ApiResult<Json<QuestionDetailResponse>> {
    let service = QuestionService::new(state.service_context());
    let response = service
        .get_question(viewer.user_id(), path.question_id()?)
        .await?;
    Ok(Json(response))
}

/// Toggle the viewer's bookmark on a question
///
/// POST /questions/:question_id/bookmark
pub async fn toggle_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<QuestionIdPath>,
) -> ApiResult<Json<BookmarkToggleResponse>> {
    let service = QuestionService::new(state.service_context());
    let response = service
        .toggle_bookmark(auth.user_id(), path.question_id()?)
        .await?;
    Ok(Json(response))
}

/// Toggle the viewer's lgtm reaction on a question
///
/// POST /questions/:question_id/lgtm
pub async fn toggle_lgtm(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<QuestionIdPath>,
) -> ApiResult<Json<LgtmToggleResponse>> {
    let service = QuestionService::new(state.service_context());
    let response = service
        .toggle_lgtm(auth.user_id(), path.question_id()?)
        .await?;
    Ok(Json(response))
}

//! Answer handlers
//!
//! Answer creation under a question, exclusive selection, and the
//! answer-level lgtm toggle.

use axum::{
    extract::{Path, State},
    Json,
};
use qna_service::{
    AnswerResponse, AnswerService, CreateAnswerRequest, LgtmToggleResponse, SelectAnswerResponse,
};

use crate::extractors::{AnswerIdPath, AuthUser, QuestionIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create an answer under a question
///
/// POST /questions/:question_id/answers
pub async fn create_answer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<QuestionIdPath>,
    ValidatedJson(request): ValidatedJson<CreateAnswerRequest>,
) -> ApiResult<Created<Json<AnswerResponse>>> {
    let service = AnswerService::new(state.service_context());
    let response = service
        .create_answer(auth.user_id(), path.question_id()?, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Exclusively select an answer for its question
///
/// POST /answers/:answer_id/select
pub async fn select_answer(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<AnswerIdPath>,
) -> ApiResult<Json<SelectAnswerResponse>> {
    let service = AnswerService::new(state.service_context());
    let response = service.select_answer(path.answer_id()?).await?;
    Ok(Json(response))
}

/// Toggle the viewer's lgtm reaction on an answer
///
/// POST /answers/:answer_id/lgtm
pub async fn toggle_lgtm(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<AnswerIdPath>,
) -> ApiResult<Json<LgtmToggleResponse>> {
    let service = AnswerService::new(state.service_context());
    let response = service
        .toggle_lgtm(auth.user_id(), path.answer_id()?)
        .await?;
    Ok(Json(response))
}

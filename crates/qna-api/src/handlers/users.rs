//! User handlers
//!
//! Endpoints for the authenticated user's own account.

use axum::{extract::State, Json};
use qna_service::{AuthService, CurrentUserResponse, UserService};

use crate::extractors::AuthUser;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get the current authenticated user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current_user(auth.user_id()).await?;
    Ok(Json(response))
}

/// Delete the current user's account and everything it owns
///
/// DELETE /users/@me
pub async fn delete_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    service.delete_account(auth.user_id()).await?;
    Ok(NoContent)
}

//! Authentication handlers
//!
//! Endpoints for OAuth2 login completion, token refresh, and logout.

use axum::{
    extract::{Path, State},
    Json,
};
use qna_service::{AuthResponse, AuthService, LogoutRequest, RefreshTokenRequest, TokenResponse};
use serde_json::Value;

use crate::extractors::ProviderPath;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Complete an OAuth2 login with the provider's attribute payload
///
/// POST /auth/oauth2/callback/:provider
pub async fn oauth2_callback(
    State(state): State<AppState>,
    Path(path): Path<ProviderPath>,
    Json(attributes): Json<Value>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(path.provider(), &attributes).await?;
    Ok(Json(response))
}

/// Refresh access token
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(request).await?;
    Ok(Json(response))
}

/// Logout
///
/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    body: Option<Json<LogoutRequest>>,
) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    service.logout(body.map(|Json(b)| b).unwrap_or_default())?;
    Ok(NoContent)
}

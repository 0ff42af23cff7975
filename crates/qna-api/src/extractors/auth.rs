//! Authentication extractors
//!
//! Resolve the bearer token in the Authorization header to a user through
//! the authentication service. Two flavors exist: `AuthUser` rejects
//! unauthenticated requests with 401, `OptionalAuthUser` degrades them to
//! anonymous so public endpoints can still personalize for logged-in users.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use qna_core::entities::User;
use qna_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user resolved from a bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    /// The authenticated user's id
    #[must_use]
    pub fn user_id(&self) -> i64 {
        self.user.id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let user = resolve_bearer(&app_state, bearer.token()).await?;

        user.map(|user| AuthUser { user }).ok_or_else(|| {
            tracing::warn!("Rejected request with invalid bearer token");
            ApiError::InvalidToken
        })
    }
}

/// Optional authenticated user.
///
/// `None` for a missing header and also for an invalid or expired token:
/// public endpoints treat a bad credential as an anonymous request rather
/// than failing it.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    /// The viewer's user id, if authenticated
    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.0.as_ref().map(AuthUser::user_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_result =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;

        let Ok(TypedHeader(Authorization(bearer))) = auth_result else {
            return Ok(OptionalAuthUser(None));
        };

        let app_state = AppState::from_ref(state);
        let user = resolve_bearer(&app_state, bearer.token()).await?;

        Ok(OptionalAuthUser(user.map(|user| AuthUser { user })))
    }
}

/// Resolve a bearer token to its user, `None` when the token does not
/// authenticate. Only infrastructure failures surface as errors.
async fn resolve_bearer(state: &AppState, token: &str) -> Result<Option<User>, ApiError> {
    let service = AuthService::new(state.service_context());
    Ok(service.authenticate(token).await?)
}

//! Authentication service
//!
//! OAuth2 login completion, token refresh, bearer resolution, and account
//! deletion. Tokens are stateless: logout revokes nothing and both tokens
//! stay live until they expire.

use qna_core::entities::User;
use qna_core::value_objects::AuthProvider;
use serde_json::Value;
use tracing::{debug, info, instrument};

use qna_common::auth::normalize_profile;
use qna_core::error::DomainError;

use crate::dto::{AuthResponse, LogoutRequest, RefreshTokenRequest, TokenResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::identity::IdentityService;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Complete an OAuth2 login from the provider's attribute payload.
    ///
    /// Normalizes the profile, reconciles it onto a local account, issues a
    /// token pair, and builds the frontend redirect URL carrying both tokens
    /// as query parameters.
    #[instrument(skip(self, attributes))]
    pub async fn login(&self, provider: &str, attributes: &Value) -> ServiceResult<AuthResponse> {
        let provider: AuthProvider = provider
            .parse()
            .map_err(|_| DomainError::UnsupportedProvider(provider.to_string()))?;

        let profile = normalize_profile(provider, attributes)?;
        let user = IdentityService::new(self.ctx).reconcile(&profile).await?;

        let pair = self.ctx.jwt_service().generate_token_pair(&user.email)?;
        let redirect_url = format!(
            "{}?access_token={}&refresh_token={}",
            self.ctx.oauth2_redirect_uri(),
            pair.access_token,
            pair.refresh_token
        );

        info!(user_id = user.id, provider = %provider, "Login completed");

        Ok(AuthResponse {
            tokens: TokenResponse::from(pair),
            redirect_url,
            user: (&user).into(),
        })
    }

    /// Issue a fresh token pair from a valid refresh token.
    ///
    /// The subject must still resolve to a live account; tokens for deleted
    /// users die here even though their signature is still good.
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<TokenResponse> {
        let email = self.ctx.jwt_service().subject_of(&request.refresh_token)?;

        if self.ctx.user_repo().find_by_email(&email).await?.is_none() {
            return Err(DomainError::InvalidToken.into());
        }

        let pair = self.ctx.jwt_service().refresh_tokens(&request.refresh_token)?;
        Ok(TokenResponse::from(pair))
    }

    /// Logout. Tokens are stateless, so there is nothing to revoke; the
    /// endpoint exists so clients have a uniform place to end a session.
    #[instrument(skip(self, _request))]
    pub fn logout(&self, _request: LogoutRequest) -> ServiceResult<()> {
        debug!("Logout acknowledged (stateless tokens, nothing revoked)");
        Ok(())
    }

    /// Delete the authenticated user's account and everything it owns
    #[instrument(skip(self))]
    pub async fn delete_account(&self, user_id: i64) -> ServiceResult<()> {
        self.ctx.user_repo().delete(user_id).await?;
        info!(user_id, "Account deleted");
        Ok(())
    }

    /// Resolve a bearer token to its user.
    ///
    /// Returns `Ok(None)` when the token is missing its mark: invalid
    /// signature, expired, or a subject that no longer resolves to an
    /// account. The caller decides whether that means anonymous or 401.
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<Option<User>> {
        if !self.ctx.jwt_service().validate(token) {
            return Ok(None);
        }

        let Ok(email) = self.ctx.jwt_service().subject_of(token) else {
            return Ok(None);
        };

        Ok(self.ctx.user_repo().find_by_email(&email).await?)
    }
}

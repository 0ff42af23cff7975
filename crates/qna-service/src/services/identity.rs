//! Identity reconciliation service
//!
//! Maps a normalized OAuth2 profile onto exactly one local user account.
//! Email is the identity anchor: the same email always resolves to the same
//! account no matter which provider asserted it, and a mismatch between the
//! asserting provider and the registered one is rejected.

use qna_common::auth::OAuth2UserProfile;
use qna_core::entities::User;
use qna_core::error::DomainError;
use qna_core::traits::NewUser;
use qna_core::value_objects::Role;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Identity reconciliation service
pub struct IdentityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IdentityService<'a> {
    /// Create a new IdentityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Find or create the local account for an authenticated profile.
    ///
    /// Existing account with the same provider: refresh name and avatar from
    /// the provider and return it. Existing account under a different
    /// provider: reject with `ProviderMismatch`. No account: register one
    /// with the default role.
    #[instrument(skip(self, profile), fields(provider = %profile.provider))]
    pub async fn reconcile(&self, profile: &OAuth2UserProfile) -> ServiceResult<User> {
        // A blank email cannot anchor an account
        if profile.email.trim().is_empty() {
            return Err(DomainError::MissingEmail.into());
        }

        if let Some(user) = self.ctx.user_repo().find_by_email(&profile.email).await? {
            return self.refresh_existing(user, profile).await;
        }

        let new_user = NewUser {
            email: profile.email.clone(),
            name: profile.name.clone(),
            profile_image: profile.image_url.clone(),
            provider: profile.provider,
            provider_id: profile.provider_id.clone(),
            role: Role::default(),
        };

        match self.ctx.user_repo().create(&new_user).await {
            Ok(user) => {
                info!(user_id = user.id, provider = %profile.provider, "User registered");
                Ok(user)
            }
            // Two first logins raced on the unique email constraint; the
            // loser re-reads the winner's row and takes the update path.
            Err(DomainError::EmailAlreadyExists) => {
                let user = self
                    .ctx
                    .user_repo()
                    .find_by_email(&profile.email)
                    .await?
                    .ok_or(DomainError::EmailAlreadyExists)?;
                self.refresh_existing(user, profile).await
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn refresh_existing(
        &self,
        user: User,
        profile: &OAuth2UserProfile,
    ) -> ServiceResult<User> {
        if user.provider != profile.provider {
            return Err(DomainError::ProviderMismatch {
                registered: user.provider,
            }
            .into());
        }

        let updated = self
            .ctx
            .user_repo()
            .update_profile(user.id, &profile.name, profile.image_url.as_deref())
            .await?;

        info!(user_id = updated.id, provider = %profile.provider, "User profile refreshed");
        Ok(updated)
    }
}

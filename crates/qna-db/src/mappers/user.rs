//! User model -> entity mapper

use qna_core::entities::User;
use qna_core::error::DomainError;
use qna_core::value_objects::{AuthProvider, Role};

use crate::models::UserModel;

/// Convert UserModel to User entity.
///
/// Provider and role are stored as text; a row holding a value outside the
/// known sets means the schema and the code disagree and surfaces as a
/// database error.
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let provider: AuthProvider = model
            .provider
            .parse()
            .map_err(|_| DomainError::DatabaseError(format!("unknown provider value: {}", model.provider)))?;
        let role: Role = model
            .role
            .parse()
            .map_err(|_| DomainError::DatabaseError(format!("unknown role value: {}", model.role)))?;

        Ok(User {
            id: model.id,
            email: model.email,
            name: model.name,
            profile_image: model.profile_image,
            provider,
            provider_id: model.provider_id,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

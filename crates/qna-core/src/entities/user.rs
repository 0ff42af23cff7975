//! User entity - a locally reconciled external identity

use chrono::{DateTime, Utc};

use crate::value_objects::{AuthProvider, Role};

/// User account created from an external identity provider login.
///
/// Email is globally unique; the `(provider, provider_id)` pair is unique per
/// provider. The provider is fixed at first creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub profile_image: Option<String>,
    pub provider: AuthProvider,
    pub provider_id: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Apply the mutable profile attributes supplied on a repeat login.
    pub fn apply_profile(&mut self, name: String, profile_image: Option<String>) {
        self.name = name;
        self.profile_image = profile_image;
        self.updated_at = Utc::now();
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

//! OAuth2 profile normalization
//!
//! Each provider returns user attributes in its own JSON shape. This module
//! flattens them into one [`OAuth2UserProfile`] so the rest of the system
//! never branches on the provider again.

use qna_core::{AuthProvider, DomainError};
use serde_json::Value;

/// Provider-independent view of an authenticated OAuth2 user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuth2UserProfile {
    pub provider: AuthProvider,
    /// Provider-scoped stable identifier for the account
    pub provider_id: String,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
}

/// Normalize a provider attribute payload into an [`OAuth2UserProfile`].
///
/// # Errors
/// Returns `UnsupportedProvider` for providers without a mapping and
/// `MissingEmail` when the payload carries no email address.
pub fn normalize_profile(
    provider: AuthProvider,
    attributes: &Value,
) -> Result<OAuth2UserProfile, DomainError> {
    let profile = match provider {
        AuthProvider::Google => google_profile(attributes),
        AuthProvider::Kakao => kakao_profile(attributes),
        AuthProvider::Apple => apple_profile(attributes),
        AuthProvider::Local => {
            return Err(DomainError::UnsupportedProvider(provider.to_string()))
        }
    };

    // Whitespace-only emails count as missing, the identity layer keys on it
    if profile.email.trim().is_empty() {
        return Err(DomainError::MissingEmail);
    }

    Ok(profile)
}

/// Google userinfo payload: `sub`, `name`, `email`, `picture` at the top level
fn google_profile(attributes: &Value) -> OAuth2UserProfile {
    OAuth2UserProfile {
        provider: AuthProvider::Google,
        provider_id: str_at(attributes, "sub"),
        name: str_at(attributes, "name"),
        email: str_at(attributes, "email"),
        image_url: opt_str_at(attributes, "picture"),
    }
}

/// Kakao payload: numeric `id` at the top level, everything else nested
/// under `kakao_account` and `kakao_account.profile`
fn kakao_profile(attributes: &Value) -> OAuth2UserProfile {
    let account = &attributes["kakao_account"];
    let profile = &account["profile"];

    // Kakao sends the account id as a JSON number
    let provider_id = match &attributes["id"] {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => String::new(),
    };

    OAuth2UserProfile {
        provider: AuthProvider::Kakao,
        provider_id,
        name: str_at(profile, "nickname"),
        email: str_at(account, "email"),
        image_url: opt_str_at(profile, "profile_image_url"),
    }
}

/// Apple ID token claims: `sub` and `email` at the top level, name only on
/// the first authorization and no avatar at all
fn apple_profile(attributes: &Value) -> OAuth2UserProfile {
    OAuth2UserProfile {
        provider: AuthProvider::Apple,
        provider_id: str_at(attributes, "sub"),
        name: str_at(attributes, "name"),
        email: str_at(attributes, "email"),
        image_url: None,
    }
}

fn str_at(value: &Value, key: &str) -> String {
    value[key].as_str().unwrap_or_default().to_string()
}

fn opt_str_at(value: &Value, key: &str) -> Option<String> {
    value[key].as_str().map(String::from)
}

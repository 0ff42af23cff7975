//! External identity provider variants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity provider a user account is bound to.
///
/// Exactly one provider per user, fixed at first login. `Local` is reserved
/// for a future password login and never produced by reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthProvider {
    Local,
    Google,
    Kakao,
    Apple,
}

impl AuthProvider {
    /// All providers usable for external login.
    pub const EXTERNAL: [Self; 3] = [Self::Google, Self::Kakao, Self::Apple];

    /// Uppercase name as stored in the database.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "LOCAL",
            Self::Google => "GOOGLE",
            Self::Kakao => "KAKAO",
            Self::Apple => "APPLE",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a provider name matches no known variant
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown auth provider: {0}")]
pub struct UnknownProviderError(pub String);

impl FromStr for AuthProvider {
    type Err = UnknownProviderError;

    /// Case-insensitive match against the provider names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LOCAL" => Ok(Self::Local),
            "GOOGLE" => Ok(Self::Google),
            "KAKAO" => Ok(Self::Kakao),
            "APPLE" => Ok(Self::Apple),
            _ => Err(UnknownProviderError(s.to_string())),
        }
    }
}

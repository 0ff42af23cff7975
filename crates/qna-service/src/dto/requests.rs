//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies carrying user input also
//! implement `Validate`.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (tokens are stateless; the body is accepted for symmetry)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// Answer Requests
// ============================================================================

/// Create answer request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAnswerRequest {
    #[validate(length(min = 1, max = 5000, message = "Answer must be 1-5000 characters"))]
    pub content: String,

    #[serde(default)]
    pub is_anonymous: bool,
}

//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::AuthProvider;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Question not found: {0}")]
    QuestionNotFound(i64),

    #[error("Answer not found: {0}")]
    AnswerNotFound(i64),

    #[error("Category not found: {0}")]
    CategoryNotFound(i64),

    // =========================================================================
    // Identity / Authentication Errors
    // =========================================================================
    #[error("Login with {0} is not supported")]
    UnsupportedProvider(String),

    #[error("Email not found from OAuth2 provider")]
    MissingEmail,

    #[error("Account already registered with {registered}. Use that provider to log in")]
    ProviderMismatch { registered: AuthProvider },

    #[error("Invalid token")]
    InvalidToken,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("A reaction must reference exactly one of a question or an answer")]
    InvalidReaction,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::QuestionNotFound(_) => "UNKNOWN_QUESTION",
            Self::AnswerNotFound(_) => "UNKNOWN_ANSWER",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",

            Self::UnsupportedProvider(_) => "UNSUPPORTED_PROVIDER",
            Self::MissingEmail => "MISSING_EMAIL",
            Self::ProviderMismatch { .. } => "PROVIDER_MISMATCH",
            Self::InvalidToken => "INVALID_TOKEN",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidReaction => "INVALID_REACTION",

            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::QuestionNotFound(_)
                | Self::AnswerNotFound(_)
                | Self::CategoryNotFound(_)
        )
    }

    /// Check if this error must surface as an unauthenticated outcome.
    ///
    /// Reconciliation and token errors map to 401 at the boundary so
    /// internal state never leaks through a generic server error.
    pub fn is_authentication(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedProvider(_)
                | Self::MissingEmail
                | Self::ProviderMismatch { .. }
                | Self::InvalidToken
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidReaction)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }
}

//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod answer;
pub mod auth;
pub mod bookmark;
pub mod context;
pub mod error;
pub mod identity;
pub mod question;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use answer::AnswerService;
pub use auth::AuthService;
pub use bookmark::BookmarkService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use identity::IdentityService;
pub use question::QuestionService;
pub use user::UserService;

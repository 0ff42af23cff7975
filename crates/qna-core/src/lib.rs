//! # qna-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Answer, Bookmark, Category, Keyword, Question, Reaction, User};
pub use error::DomainError;
pub use traits::{
    AnswerRepository, AnswerSelection, BookmarkRepository, CategoryRepository, NewAnswer, NewUser,
    Page, PageRequest, QuestionRepository, ReactionRepository, ReactionToggle, RepoResult,
    UserRepository,
};
pub use value_objects::{AuthProvider, ReactionTarget, Role};

//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in qna-core.
//! Each repository handles database operations for a specific domain entity.

mod answer;
mod bookmark;
mod category;
mod error;
mod question;
mod reaction;
mod user;

pub use answer::PgAnswerRepository;
pub use bookmark::PgBookmarkRepository;
pub use category::PgCategoryRepository;
pub use question::PgQuestionRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;

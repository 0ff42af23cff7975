//! Database models - SQLx-compatible structs for PostgreSQL tables

mod answer;
mod bookmark;
mod category;
mod question;
mod reaction;
mod user;

pub use answer::AnswerModel;
pub use bookmark::BookmarkModel;
pub use category::CategoryModel;
pub use question::QuestionModel;
pub use reaction::ReactionModel;
pub use user::UserModel;

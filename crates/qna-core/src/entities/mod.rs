//! Domain entities

mod answer;
mod bookmark;
mod category;
mod keyword;
mod question;
mod reaction;
mod user;

pub use answer::Answer;
pub use bookmark::Bookmark;
pub use category::Category;
pub use keyword::Keyword;
pub use question::Question;
pub use reaction::Reaction;
pub use user::User;

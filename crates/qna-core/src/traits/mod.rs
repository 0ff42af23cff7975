//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AnswerRepository, AnswerSelection, BookmarkRepository, CategoryRepository, NewAnswer, NewUser,
    Page, PageRequest, QuestionRepository, ReactionRepository, ReactionToggle, RepoResult,
    UserRepository,
};

//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! The toggle operations are deliberately part of the port: each one is a
//! single logical transaction (fact-row mutation plus counter update) and the
//! store is the only place that can make it atomic.

use async_trait::async_trait;

use crate::entities::{Answer, Bookmark, Category, Question, Reaction, User};
use crate::error::DomainError;
use crate::value_objects::{AuthProvider, ReactionTarget, Role};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Offset pagination request (1-based page index)
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    #[must_use]
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: page.max(1),
            size: size.clamp(1, 100),
        }
    }

    /// Row offset for SQL queries
    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, size: 20 }
    }
}

/// One page of results with the total row count
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total: i64,
}

impl<T> Page<T> {
    /// Map the items, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }

    /// Number of pages at the current page size
    #[must_use]
    pub fn total_pages(&self) -> i64 {
        if self.size == 0 {
            0
        } else {
            (self.total + self.size - 1) / self.size
        }
    }
}

// ============================================================================
// User Repository
// ============================================================================

/// Attributes for inserting a new user (the store assigns the id)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub profile_image: Option<String>,
    pub provider: AuthProvider,
    pub provider_id: String,
    pub role: Role,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by email (unique across all providers)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Insert a new user and return the stored row.
    ///
    /// Fails with `DomainError::EmailAlreadyExists` when the unique-email
    /// constraint rejects the insert (concurrent first logins).
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Update mutable profile attributes (name, avatar) in place
    async fn update_profile(
        &self,
        id: i64,
        name: &str,
        profile_image: Option<&str>,
    ) -> RepoResult<User>;

    /// Delete a user and everything it owns (bookmarks, reactions)
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Question Repository
// ============================================================================

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Find question by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Question>>;

    /// List all questions ordered by title ascending
    async fn list(&self, page: PageRequest) -> RepoResult<Page<Question>>;

    /// List questions in one category ordered by title ascending
    async fn list_by_category(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> RepoResult<Page<Question>>;
}

// ============================================================================
// Answer Repository
// ============================================================================

/// Attributes for inserting a new answer
#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub content: String,
    pub question_id: i64,
    pub user_id: i64,
    pub is_anonymous: bool,
}

/// Outcome of an exclusive answer selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerSelection {
    /// Question the selected answer belongs to
    pub question_id: i64,
    /// Previously selected answer that was unmarked, if any
    pub previous: Option<i64>,
}

#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Find answer by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Answer>>;

    /// Answers under a question, selected first, then by lgtm count
    /// descending, then newest first
    async fn find_by_question(&self, question_id: i64) -> RepoResult<Vec<Answer>>;

    /// The currently selected answer under a question, if any
    async fn find_selected(&self, question_id: i64) -> RepoResult<Option<Answer>>;

    /// Insert a new answer and return the stored row
    async fn create(&self, answer: &NewAnswer) -> RepoResult<Answer>;

    /// Exclusively select an answer.
    ///
    /// Atomically unmarks any previously selected answer under the same
    /// question, marks the target, and copies the target's content into the
    /// question's `default_answer`. All three writes commit together.
    async fn select(&self, answer_id: i64) -> RepoResult<AnswerSelection>;
}

// ============================================================================
// Bookmark Repository
// ============================================================================

#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Whether the user has bookmarked the question
    async fn exists(&self, user_id: i64, question_id: i64) -> RepoResult<bool>;

    /// Toggle the bookmark for (user, question).
    ///
    /// Returns `true` when the question is bookmarked after the call. The
    /// natural-key unique constraint makes concurrent duplicate inserts
    /// collapse into a no-op.
    async fn toggle(&self, user_id: i64, question_id: i64) -> RepoResult<bool>;

    /// A user's bookmarks, newest first
    async fn find_by_user(&self, user_id: i64, page: PageRequest) -> RepoResult<Page<Bookmark>>;

    /// A user's bookmarks restricted to questions in one category
    async fn find_by_user_and_category(
        &self,
        user_id: i64,
        category_id: i64,
        page: PageRequest,
    ) -> RepoResult<Page<Bookmark>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

/// Outcome of a reaction toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionToggle {
    /// Whether the user's reaction exists after the call
    pub active: bool,
    /// The target's denormalized lgtm count after the call
    pub lgtm_count: i32,
}

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the user's reaction on a target, if any
    async fn find(&self, user_id: i64, target: ReactionTarget) -> RepoResult<Option<Reaction>>;

    /// Whether the user has reacted to the target
    async fn exists(&self, user_id: i64, target: ReactionTarget) -> RepoResult<bool>;

    /// Toggle the user's reaction and adjust the target's lgtm counter.
    ///
    /// Fact-row mutation and counter update are one transaction; the counter
    /// only moves when a row was actually inserted or deleted, so it cannot
    /// drift from the fact table under concurrent calls.
    async fn toggle(&self, user_id: i64, target: ReactionTarget) -> RepoResult<ReactionToggle>;

    /// Live reaction rows referencing the target
    async fn count(&self, target: ReactionTarget) -> RepoResult<i64>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find category by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Category>>;
}

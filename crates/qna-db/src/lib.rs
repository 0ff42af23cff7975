//! # qna-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `qna-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! The toggle operations (bookmarks, reactions) run as single transactions
//! here so that fact rows and denormalized counters always move together.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use qna_db::pool::PoolConfig;
//! use qna_db::repositories::PgUserRepository;
//! use qna_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = PoolConfig::new("postgresql://localhost/qna", 10, 1)
//!         .connect()
//!         .await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{PgPool, PoolConfig};
pub use repositories::{
    PgAnswerRepository, PgBookmarkRepository, PgCategoryRepository, PgQuestionRepository,
    PgReactionRepository, PgUserRepository,
};

//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod answers;
pub mod auth;
pub mod bookmarks;
pub mod health;
pub mod questions;
pub mod users;

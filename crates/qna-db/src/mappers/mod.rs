//! Model to entity mappers
//!
//! This module provides conversions between database models and domain
//! entities (qna-core). Rows that store enums as text or split a value
//! object across columns convert fallibly via `TryFrom`; the rest use
//! plain `From`.

mod answer;
mod bookmark;
mod category;
mod question;
mod reaction;
mod user;

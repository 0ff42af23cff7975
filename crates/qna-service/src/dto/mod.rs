//! Data transfer objects
//!
//! Request DTOs (deserialized and validated at the API boundary) and
//! response DTOs (serialized to JSON).

mod mappers;
mod requests;
mod responses;

pub use requests::{CreateAnswerRequest, LogoutRequest, RefreshTokenRequest};
pub use responses::{
    AnswerResponse, AuthResponse, BookmarkResponse, BookmarkToggleResponse,
    CurrentUserResponse, LgtmToggleResponse, PageMeta, PageResponse, QuestionDetailResponse,
    QuestionSummaryResponse, SelectAnswerResponse, TokenResponse,
};

//! # qna-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AnswerResponse, AuthResponse, BookmarkResponse, BookmarkToggleResponse, CreateAnswerRequest,
    CurrentUserResponse, LgtmToggleResponse, LogoutRequest, PageResponse, QuestionDetailResponse,
    QuestionSummaryResponse, RefreshTokenRequest, SelectAnswerResponse, TokenResponse,
};
pub use services::{
    AnswerService, AuthService, BookmarkService, IdentityService, QuestionService, ServiceContext,
    ServiceError, ServiceResult, UserService,
};

//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Numeric IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Paginated response with offset-based pagination
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> PageResponse<T> {
    pub fn new(data: Vec<T>, page: i64, size: i64, total: i64) -> Self {
        let total_pages = if size == 0 { 0 } else { (total + size - 1) / size };
        Self {
            data,
            pagination: PageMeta {
                page,
                size,
                total,
                total_pages,
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub page: i64,
    pub size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Token pair issued on login or refresh
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login response: the token pair, the reconciled user, and the frontend
/// redirect URL carrying both tokens as query parameters
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub tokens: TokenResponse,
    pub redirect_url: String,
    pub user: CurrentUserResponse,
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user (full profile)
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub profile_image: Option<String>,
    pub provider: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Question Responses
// ============================================================================

/// Question list entry with the viewer's engagement flags
#[derive(Debug, Serialize)]
pub struct QuestionSummaryResponse {
    pub id: String,
    pub title: String,
    pub category_id: Option<String>,
    pub lgtm_count: i32,
    /// Whether the requesting user has bookmarked this question
    pub bookmarked: bool,
    /// Whether the requesting user has reacted to this question
    pub lgtm_reacted: bool,
}

/// Full question view with its answers
#[derive(Debug, Serialize)]
pub struct QuestionDetailResponse {
    pub id: String,
    pub title: String,
    pub content: Option<String>,
    pub default_answer: Option<String>,
    pub category_id: Option<String>,
    pub keyword_ids: Vec<String>,
    pub lgtm_count: i32,
    pub bookmarked: bool,
    pub lgtm_reacted: bool,
    pub answers: Vec<AnswerResponse>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Answer Responses
// ============================================================================

/// Answer under a question.
///
/// `user_id` is omitted for anonymous answers.
#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub id: String,
    pub content: String,
    pub question_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub is_anonymous: bool,
    pub is_selected: bool,
    pub lgtm_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Outcome of an exclusive answer selection
#[derive(Debug, Serialize)]
pub struct SelectAnswerResponse {
    pub question_id: String,
    pub selected_answer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_answer_id: Option<String>,
}

// ============================================================================
// Engagement Responses
// ============================================================================

/// Outcome of a bookmark toggle
#[derive(Debug, Serialize)]
pub struct BookmarkToggleResponse {
    pub bookmarked: bool,
}

/// Outcome of a reaction toggle
#[derive(Debug, Serialize)]
pub struct LgtmToggleResponse {
    pub lgtm: bool,
    pub lgtm_count: i32,
}

// ============================================================================
// Bookmark Responses
// ============================================================================

/// Bookmark list entry with the bookmarked question
#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    pub id: String,
    pub question: QuestionSummaryResponse,
    pub created_at: DateTime<Utc>,
}

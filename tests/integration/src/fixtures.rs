//! Test fixtures and data generators
//!
//! Provides reusable test data and response mirrors for integration tests.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A unique test email
pub fn unique_email() -> String {
    format!("test{}@example.com", unique_suffix())
}

/// Attribute payload as Google's userinfo endpoint would return it
pub fn google_attributes(email: &str) -> Value {
    json!({
        "sub": format!("google-{email}"),
        "name": "Test User",
        "email": email,
        "picture": "https://lh3.googleusercontent.com/a/photo.jpg"
    })
}

/// Attribute payload as Kakao's user endpoint would return it
pub fn kakao_attributes(email: &str) -> Value {
    json!({
        "id": 123_456_789,
        "kakao_account": {
            "email": email,
            "profile": {
                "nickname": "Test User",
                "profile_image_url": "https://k.kakaocdn.net/img.jpg"
            }
        }
    })
}

/// Login response (tokens are flattened alongside user and redirect)
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub redirect_url: String,
    pub user: UserResponse,
}

/// User profile response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub profile_image: Option<String>,
    pub provider: String,
    pub role: String,
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Token pair response
#[derive(Debug, Deserialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Create answer request
#[derive(Debug, Serialize)]
pub struct CreateAnswerRequest {
    pub content: String,
    pub is_anonymous: bool,
}

impl CreateAnswerRequest {
    pub fn simple(content: &str) -> Self {
        Self {
            content: content.to_string(),
            is_anonymous: false,
        }
    }
}

/// Answer response
#[derive(Debug, Deserialize)]
pub struct AnswerResponse {
    pub id: String,
    pub content: String,
    pub question_id: String,
    pub user_id: Option<String>,
    pub is_anonymous: bool,
    pub is_selected: bool,
    pub lgtm_count: i32,
}

/// Answer selection response
#[derive(Debug, Deserialize)]
pub struct SelectAnswerResponse {
    pub question_id: String,
    pub selected_answer_id: String,
    pub previous_answer_id: Option<String>,
}

/// Question list entry
#[derive(Debug, Deserialize)]
pub struct QuestionSummaryResponse {
    pub id: String,
    pub title: String,
    pub lgtm_count: i32,
    pub bookmarked: bool,
    pub lgtm_reacted: bool,
}

/// Question detail
#[derive(Debug, Deserialize)]
pub struct QuestionDetailResponse {
    pub id: String,
    pub title: String,
    pub default_answer: Option<String>,
    pub lgtm_count: i32,
    pub bookmarked: bool,
    pub lgtm_reacted: bool,
    pub answers: Vec<AnswerResponse>,
}

/// Paginated response
#[derive(Debug, Deserialize)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PageMeta {
    pub page: i64,
    pub size: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// Bookmark toggle response
#[derive(Debug, Deserialize)]
pub struct BookmarkToggleResponse {
    pub bookmarked: bool,
}

/// Lgtm toggle response
#[derive(Debug, Deserialize)]
pub struct LgtmToggleResponse {
    pub lgtm: bool,
    pub lgtm_count: i32,
}

/// Bookmark list entry
#[derive(Debug, Deserialize)]
pub struct BookmarkResponse {
    pub id: String,
    pub question: QuestionSummaryResponse,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

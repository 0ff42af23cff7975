//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{answers, auth, bookmarks, health, questions, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(question_routes())
        .merge(answer_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/oauth2/callback/:provider", post(auth::oauth2_callback))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me", delete(users::delete_current_user))
        .route("/users/@me/bookmarks", get(bookmarks::list_bookmarks))
}

/// Question routes
fn question_routes() -> Router<AppState> {
    Router::new()
        .route("/questions", get(questions::list_questions))
        .route("/questions/:question_id", get(questions::get_question))
        .route("/questions/:question_id/bookmark", post(questions::toggle_bookmark))
        .route("/questions/:question_id/lgtm", post(questions::toggle_lgtm))
        .route("/questions/:question_id/answers", post(answers::create_answer))
}

/// Answer routes
fn answer_routes() -> Router<AppState> {
    Router::new()
        .route("/answers/:answer_id/select", post(answers::select_answer))
        .route("/answers/:answer_id/lgtm", post(answers::toggle_lgtm))
}

//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the schema migrated
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, seed_pool, seed_question, TestServer,
};
use reqwest::StatusCode;

async fn login(server: &TestServer, email: &str) -> AuthResponse {
    let response = server
        .post("/api/v1/auth/oauth2/callback/google", &google_attributes(email))
        .await
        .expect("Request failed");
    assert_json(response, StatusCode::OK).await.expect("Login failed")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_oauth2_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let email = unique_email();

    let auth = login(&server, &email).await;

    assert_eq!(auth.user.email, email);
    assert_eq!(auth.user.provider, "GOOGLE");
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
    assert!(auth.redirect_url.contains("access_token="));
}

#[tokio::test]
async fn test_repeat_login_resolves_same_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let email = unique_email();

    let first = login(&server, &email).await;
    let second = login(&server, &email).await;

    assert_eq!(first.user.id, second.user.id);
}

#[tokio::test]
async fn test_login_provider_mismatch() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let email = unique_email();

    // Register via Google first
    login(&server, &email).await;

    // The same email via Kakao is rejected
    let response = server
        .post("/api/v1/auth/oauth2/callback/kakao", &kakao_attributes(&email))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "PROVIDER_MISMATCH");
    assert!(error.error.message.contains("GOOGLE"));
}

#[tokio::test]
async fn test_login_unknown_provider() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/v1/auth/oauth2/callback/github",
            &google_attributes(&unique_email()),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "UNSUPPORTED_PROVIDER");
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login(&server, &unique_email()).await;

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &RefreshTokenRequest {
                refresh_token: auth.refresh_token,
            },
        )
        .await
        .unwrap();
    let tokens: TokenPairResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!tokens.access_token.is_empty());
    assert_eq!(tokens.token_type, "Bearer");
}

#[tokio::test]
async fn test_refresh_with_invalid_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &RefreshTokenRequest {
                refresh_token: "not-a-valid-token".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login(&server, &unique_email()).await;

    let response = server
        .post_auth_empty("/api/v1/auth/logout", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Tokens are stateless; the access token still works after logout
    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let email = unique_email();
    let auth = login(&server, &email).await;

    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.email, email);
    assert_eq!(user.role, "USER");
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/@me", "garbage-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_delete_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login(&server, &unique_email()).await;

    let response = server
        .delete_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The token's subject no longer resolves to an account
    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Question Tests
// ============================================================================

#[tokio::test]
async fn test_list_questions_anonymous() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/questions").await.unwrap();
    let page: PageResponse<QuestionSummaryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert!(page.data.iter().all(|q| !q.bookmarked && !q.lgtm_reacted));
}

#[tokio::test]
async fn test_list_questions_with_invalid_token_is_anonymous() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // An invalid bearer on a public endpoint degrades to anonymous, not 401
    let response = server
        .get_auth("/api/v1/questions", "garbage-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_bookmark_toggle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.expect("Failed to connect pool");
    let question_id = seed_question(&pool, &format!("Bookmark test {}", unique_suffix()))
        .await
        .unwrap();
    let auth = login(&server, &unique_email()).await;

    let path = format!("/api/v1/questions/{question_id}/bookmark");

    let response = server.post_auth_empty(&path, &auth.access_token).await.unwrap();
    let toggle: BookmarkToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(toggle.bookmarked);

    // The question shows up in the user's bookmark list
    let response = server
        .get_auth("/api/v1/users/@me/bookmarks", &auth.access_token)
        .await
        .unwrap();
    let page: PageResponse<BookmarkResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page
        .data
        .iter()
        .any(|b| b.question.id == question_id.to_string()));

    // Toggling again removes it
    let response = server.post_auth_empty(&path, &auth.access_token).await.unwrap();
    let toggle: BookmarkToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!toggle.bookmarked);
}

#[tokio::test]
async fn test_bookmark_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/questions/1/bookmark", &serde_json::json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_question_lgtm_toggle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.expect("Failed to connect pool");
    let question_id = seed_question(&pool, &format!("Lgtm test {}", unique_suffix()))
        .await
        .unwrap();
    let auth = login(&server, &unique_email()).await;

    let path = format!("/api/v1/questions/{question_id}/lgtm");

    let on: LgtmToggleResponse = assert_json(
        server.post_auth_empty(&path, &auth.access_token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(on.lgtm);
    assert_eq!(on.lgtm_count, 1);

    let off: LgtmToggleResponse = assert_json(
        server.post_auth_empty(&path, &auth.access_token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(!off.lgtm);
    assert_eq!(off.lgtm_count, 0);
}

#[tokio::test]
async fn test_unknown_question_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login(&server, &unique_email()).await;

    let response = server
        .post_auth_empty("/api/v1/questions/999999999/lgtm", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Answer Tests
// ============================================================================

#[tokio::test]
async fn test_answer_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.expect("Failed to connect pool");
    let question_id = seed_question(&pool, &format!("Answer test {}", unique_suffix()))
        .await
        .unwrap();
    let auth = login(&server, &unique_email()).await;

    // Create two answers
    let response = server
        .post_auth(
            &format!("/api/v1/questions/{question_id}/answers"),
            &auth.access_token,
            &CreateAnswerRequest::simple("First answer"),
        )
        .await
        .unwrap();
    let first: AnswerResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!first.is_selected);

    let response = server
        .post_auth(
            &format!("/api/v1/questions/{question_id}/answers"),
            &auth.access_token,
            &CreateAnswerRequest::simple("Second answer"),
        )
        .await
        .unwrap();
    let second: AnswerResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Select the first, then the second; selection is exclusive
    let response = server
        .post_auth_empty(&format!("/api/v1/answers/{}/select", first.id), &auth.access_token)
        .await
        .unwrap();
    let selection: SelectAnswerResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(selection.selected_answer_id, first.id);
    assert!(selection.previous_answer_id.is_none());

    let response = server
        .post_auth_empty(&format!("/api/v1/answers/{}/select", second.id), &auth.access_token)
        .await
        .unwrap();
    let selection: SelectAnswerResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(selection.previous_answer_id.as_deref(), Some(first.id.as_str()));

    // The question detail reflects the selection
    let response = server
        .get(&format!("/api/v1/questions/{question_id}"))
        .await
        .unwrap();
    let detail: QuestionDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.default_answer.as_deref(), Some("Second answer"));
    let selected: Vec<_> = detail.answers.iter().filter(|a| a.is_selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, second.id);
}

#[tokio::test]
async fn test_create_answer_rejects_empty_content() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.expect("Failed to connect pool");
    let question_id = seed_question(&pool, &format!("Validation test {}", unique_suffix()))
        .await
        .unwrap();
    let auth = login(&server, &unique_email()).await;

    let response = server
        .post_auth(
            &format!("/api/v1/questions/{question_id}/answers"),
            &auth.access_token,
            &CreateAnswerRequest::simple(""),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_answer_lgtm_toggle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.expect("Failed to connect pool");
    let question_id = seed_question(&pool, &format!("Answer lgtm test {}", unique_suffix()))
        .await
        .unwrap();
    let auth = login(&server, &unique_email()).await;

    let response = server
        .post_auth(
            &format!("/api/v1/questions/{question_id}/answers"),
            &auth.access_token,
            &CreateAnswerRequest::simple("An answer"),
        )
        .await
        .unwrap();
    let answer: AnswerResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/answers/{}/lgtm", answer.id);

    let on: LgtmToggleResponse = assert_json(
        server.post_auth_empty(&path, &auth.access_token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(on.lgtm);
    assert_eq!(on.lgtm_count, 1);

    let off: LgtmToggleResponse = assert_json(
        server.post_auth_empty(&path, &auth.access_token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(!off.lgtm);
    assert_eq!(off.lgtm_count, 0);
}

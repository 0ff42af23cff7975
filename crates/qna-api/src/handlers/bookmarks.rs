//! Bookmark handlers
//!
//! Endpoint for listing the authenticated user's bookmarked questions.

use axum::{
    extract::{Query, State},
    Json,
};
use qna_service::{BookmarkResponse, BookmarkService, PageResponse};
use serde::Deserialize;

use crate::extractors::{AuthUser, Pagination};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Query parameters for listing bookmarks
#[derive(Debug, Deserialize)]
pub struct ListBookmarksQuery {
    #[serde(default)]
    pub category_id: Option<String>,
}

impl ListBookmarksQuery {
    fn category_id(&self) -> Result<Option<i64>, ApiError> {
        self.category_id
            .as_deref()
            .map(|raw| {
                raw.parse::<i64>()
                    .map_err(|_| ApiError::invalid_query("Invalid category_id format"))
            })
            .transpose()
    }
}

/// List the current user's bookmarks, optionally filtered by category
///
/// GET /users/@me/bookmarks
pub async fn list_bookmarks(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListBookmarksQuery>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PageResponse<BookmarkResponse>>> {
    let service = BookmarkService::new(state.service_context());
    let response = service
        .list_bookmarks(auth.user_id(), query.category_id()?, page)
        .await?;
    Ok(Json(response))
}

//! PostgreSQL implementation of BookmarkRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use qna_core::entities::Bookmark;
use qna_core::traits::{BookmarkRepository, Page, PageRequest, RepoResult};

use crate::models::BookmarkModel;

use super::error::map_db_error;

const BOOKMARK_COLUMNS: &str = r"
    b.id, b.user_id, b.question_id, b.created_at, b.updated_at
";

/// PostgreSQL implementation of BookmarkRepository
#[derive(Clone)]
pub struct PgBookmarkRepository {
    pool: PgPool,
}

impl PgBookmarkRepository {
    /// Create a new PgBookmarkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookmarkRepository for PgBookmarkRepository {
    #[instrument(skip(self))]
    async fn exists(&self, user_id: i64, question_id: i64) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM bookmarks WHERE user_id = $1 AND question_id = $2)
            ",
        )
        .bind(user_id)
        .bind(question_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn toggle(&self, user_id: i64, question_id: i64) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Delete-first: a present row means this call turns the bookmark
        // off. When nothing was deleted, insert with ON CONFLICT so that a
        // concurrent duplicate collapses into the same "on" outcome instead
        // of a constraint error.
        let deleted = sqlx::query(
            r"
            DELETE FROM bookmarks WHERE user_id = $1 AND question_id = $2
            ",
        )
        .bind(user_id)
        .bind(question_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        let active = if deleted > 0 {
            false
        } else {
            sqlx::query(
                r"
                INSERT INTO bookmarks (user_id, question_id, created_at, updated_at)
                VALUES ($1, $2, NOW(), NOW())
                ON CONFLICT (user_id, question_id) DO NOTHING
                ",
            )
            .bind(user_id)
            .bind(question_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            true
        };

        tx.commit().await.map_err(map_db_error)?;

        Ok(active)
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i64, page: PageRequest) -> RepoResult<Page<Bookmark>> {
        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM bookmarks WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let results = sqlx::query_as::<_, BookmarkModel>(&format!(
            r"
            SELECT {BOOKMARK_COLUMNS}
            FROM bookmarks b
            WHERE b.user_id = $1
            ORDER BY b.created_at DESC
            LIMIT $2 OFFSET $3
            ",
        ))
        .bind(user_id)
        .bind(page.size)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page {
            items: results.into_iter().map(Bookmark::from).collect(),
            page: page.page,
            size: page.size,
            total,
        })
    }

    #[instrument(skip(self))]
    async fn find_by_user_and_category(
        &self,
        user_id: i64,
        category_id: i64,
        page: PageRequest,
    ) -> RepoResult<Page<Bookmark>> {
        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM bookmarks b
            JOIN questions q ON q.id = b.question_id
            WHERE b.user_id = $1 AND q.category_id = $2
            ",
        )
        .bind(user_id)
        .bind(category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let results = sqlx::query_as::<_, BookmarkModel>(&format!(
            r"
            SELECT {BOOKMARK_COLUMNS}
            FROM bookmarks b
            JOIN questions q ON q.id = b.question_id
            WHERE b.user_id = $1 AND q.category_id = $2
            ORDER BY b.created_at DESC
            LIMIT $3 OFFSET $4
            ",
        ))
        .bind(user_id)
        .bind(category_id)
        .bind(page.size)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page {
            items: results.into_iter().map(Bookmark::from).collect(),
            page: page.page,
            size: page.size,
            total,
        })
    }
}

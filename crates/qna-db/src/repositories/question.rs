//! PostgreSQL implementation of QuestionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use qna_core::entities::Question;
use qna_core::traits::{Page, PageRequest, QuestionRepository, RepoResult};

use crate::models::QuestionModel;

use super::error::map_db_error;

const QUESTION_COLUMNS: &str = r"
    q.id, q.title, q.content, q.default_answer, q.category_id, q.lgtm_count,
    q.created_at, q.updated_at,
    COALESCE(
        ARRAY_AGG(qk.keyword_id) FILTER (WHERE qk.keyword_id IS NOT NULL),
        '{}'
    ) AS keyword_ids
";

/// PostgreSQL implementation of QuestionRepository
#[derive(Clone)]
pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    /// Create a new PgQuestionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Question>> {
        let result = sqlx::query_as::<_, QuestionModel>(&format!(
            r"
            SELECT {QUESTION_COLUMNS}
            FROM questions q
            LEFT JOIN question_keywords qk ON qk.question_id = q.id
            WHERE q.id = $1
            GROUP BY q.id
            ",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Question::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest) -> RepoResult<Page<Question>> {
        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM questions
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let results = sqlx::query_as::<_, QuestionModel>(&format!(
            r"
            SELECT {QUESTION_COLUMNS}
            FROM questions q
            LEFT JOIN question_keywords qk ON qk.question_id = q.id
            GROUP BY q.id
            ORDER BY q.title ASC
            LIMIT $1 OFFSET $2
            ",
        ))
        .bind(page.size)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page {
            items: results.into_iter().map(Question::from).collect(),
            page: page.page,
            size: page.size,
            total,
        })
    }

    #[instrument(skip(self))]
    async fn list_by_category(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> RepoResult<Page<Question>> {
        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM questions WHERE category_id = $1
            ",
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let results = sqlx::query_as::<_, QuestionModel>(&format!(
            r"
            SELECT {QUESTION_COLUMNS}
            FROM questions q
            LEFT JOIN question_keywords qk ON qk.question_id = q.id
            WHERE q.category_id = $1
            GROUP BY q.id
            ORDER BY q.title ASC
            LIMIT $2 OFFSET $3
            ",
        ))
        .bind(category_id)
        .bind(page.size)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page {
            items: results.into_iter().map(Question::from).collect(),
            page: page.page,
            size: page.size,
            total,
        })
    }
}

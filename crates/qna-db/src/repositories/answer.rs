//! PostgreSQL implementation of AnswerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use qna_core::entities::Answer;
use qna_core::traits::{AnswerRepository, AnswerSelection, NewAnswer, RepoResult};

use crate::models::AnswerModel;

use super::error::{answer_not_found, map_db_error};

const ANSWER_COLUMNS: &str = r"
    id, content, question_id, user_id, is_anonymous, is_selected, lgtm_count,
    created_at, updated_at
";

/// PostgreSQL implementation of AnswerRepository
#[derive(Clone)]
pub struct PgAnswerRepository {
    pool: PgPool,
}

impl PgAnswerRepository {
    /// Create a new PgAnswerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerRepository for PgAnswerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Answer>> {
        let result = sqlx::query_as::<_, AnswerModel>(&format!(
            r"
            SELECT {ANSWER_COLUMNS}
            FROM answers
            WHERE id = $1
            ",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Answer::from))
    }

    #[instrument(skip(self))]
    async fn find_by_question(&self, question_id: i64) -> RepoResult<Vec<Answer>> {
        let results = sqlx::query_as::<_, AnswerModel>(&format!(
            r"
            SELECT {ANSWER_COLUMNS}
            FROM answers
            WHERE question_id = $1
            ORDER BY is_selected DESC, lgtm_count DESC, created_at DESC
            ",
        ))
        .bind(question_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Answer::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_selected(&self, question_id: i64) -> RepoResult<Option<Answer>> {
        let result = sqlx::query_as::<_, AnswerModel>(&format!(
            r"
            SELECT {ANSWER_COLUMNS}
            FROM answers
            WHERE question_id = $1 AND is_selected
            ",
        ))
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Answer::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, answer: &NewAnswer) -> RepoResult<Answer> {
        let model = sqlx::query_as::<_, AnswerModel>(&format!(
            r"
            INSERT INTO answers (content, question_id, user_id, is_anonymous, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING {ANSWER_COLUMNS}
            ",
        ))
        .bind(&answer.content)
        .bind(answer.question_id)
        .bind(answer.user_id)
        .bind(answer.is_anonymous)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Answer::from(model))
    }

    #[instrument(skip(self))]
    async fn select(&self, answer_id: i64) -> RepoResult<AnswerSelection> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the target row first: two racing selections on the same
        // question then serialize here and the later one still observes a
        // single selected answer.
        let target = sqlx::query_as::<_, (i64, String)>(
            r"
            SELECT question_id, content FROM answers WHERE id = $1 FOR UPDATE
            ",
        )
        .bind(answer_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some((question_id, content)) = target else {
            return Err(answer_not_found(answer_id));
        };

        let previous = sqlx::query_scalar::<_, i64>(
            r"
            UPDATE answers
            SET is_selected = FALSE, updated_at = NOW()
            WHERE question_id = $1 AND is_selected AND id <> $2
            RETURNING id
            ",
        )
        .bind(question_id)
        .bind(answer_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            UPDATE answers
            SET is_selected = TRUE, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(answer_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            UPDATE questions
            SET default_answer = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(question_id)
        .bind(&content)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(AnswerSelection {
            question_id,
            previous,
        })
    }
}

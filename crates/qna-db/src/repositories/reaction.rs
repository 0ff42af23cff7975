//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use qna_core::entities::Reaction;
use qna_core::error::DomainError;
use qna_core::traits::{ReactionRepository, ReactionToggle, RepoResult};
use qna_core::value_objects::ReactionTarget;

use crate::models::ReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Fact column and counter table for a reaction target
fn target_tables(target: ReactionTarget) -> (&'static str, &'static str) {
    match target {
        ReactionTarget::Question(_) => ("question_id", "questions"),
        ReactionTarget::Answer(_) => ("answer_id", "answers"),
    }
}

fn target_not_found(target: ReactionTarget) -> DomainError {
    match target {
        ReactionTarget::Question(id) => DomainError::QuestionNotFound(id),
        ReactionTarget::Answer(id) => DomainError::AnswerNotFound(id),
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: i64, target: ReactionTarget) -> RepoResult<Option<Reaction>> {
        let (column, _) = target_tables(target);

        let result = sqlx::query_as::<_, ReactionModel>(&format!(
            r"
            SELECT id, user_id, question_id, answer_id, created_at, updated_at
            FROM reactions
            WHERE user_id = $1 AND {column} = $2
            ",
        ))
        .bind(user_id)
        .bind(target.id())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn exists(&self, user_id: i64, target: ReactionTarget) -> RepoResult<bool> {
        let (column, _) = target_tables(target);

        let result = sqlx::query_scalar::<_, bool>(&format!(
            r"
            SELECT EXISTS(SELECT 1 FROM reactions WHERE user_id = $1 AND {column} = $2)
            ",
        ))
        .bind(user_id)
        .bind(target.id())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn toggle(&self, user_id: i64, target: ReactionTarget) -> RepoResult<ReactionToggle> {
        let (column, table) = target_tables(target);
        let target_id = target.id();

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Delete-first, mirroring the bookmark toggle. The counter only
        // moves when a fact row actually changed, so two racing calls can
        // never double-count.
        let deleted = sqlx::query(&format!(
            r"
            DELETE FROM reactions WHERE user_id = $1 AND {column} = $2
            ",
        ))
        .bind(user_id)
        .bind(target_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        let (active, lgtm_count) = if deleted > 0 {
            let count = sqlx::query_scalar::<_, i32>(&format!(
                r"
                UPDATE {table}
                SET lgtm_count = GREATEST(lgtm_count - 1, 0), updated_at = NOW()
                WHERE id = $1
                RETURNING lgtm_count
                ",
            ))
            .bind(target_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| target_not_found(target))?;

            (false, count)
        } else {
            let inserted = sqlx::query(&format!(
                r"
                INSERT INTO reactions (user_id, {column}, created_at, updated_at)
                VALUES ($1, $2, NOW(), NOW())
                ON CONFLICT (user_id, {column}) DO NOTHING
                ",
            ))
            .bind(user_id)
            .bind(target_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?
            .rows_affected();

            let count = if inserted > 0 {
                sqlx::query_scalar::<_, i32>(&format!(
                    r"
                    UPDATE {table}
                    SET lgtm_count = lgtm_count + 1, updated_at = NOW()
                    WHERE id = $1
                    RETURNING lgtm_count
                    ",
                ))
                .bind(target_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_db_error)?
                .ok_or_else(|| target_not_found(target))?
            } else {
                // A concurrent call already created the row; the state is
                // "reacted" either way and the counter stays untouched.
                sqlx::query_scalar::<_, i32>(&format!(
                    r"
                    SELECT lgtm_count FROM {table} WHERE id = $1
                    ",
                ))
                .bind(target_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_db_error)?
                .ok_or_else(|| target_not_found(target))?
            };

            (true, count)
        };

        tx.commit().await.map_err(map_db_error)?;

        Ok(ReactionToggle { active, lgtm_count })
    }

    #[instrument(skip(self))]
    async fn count(&self, target: ReactionTarget) -> RepoResult<i64> {
        let (column, _) = target_tables(target);

        let result = sqlx::query_scalar::<_, i64>(&format!(
            r"
            SELECT COUNT(*) FROM reactions WHERE {column} = $1
            ",
        ))
        .bind(target.id())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}

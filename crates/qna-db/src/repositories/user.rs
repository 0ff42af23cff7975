//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use qna_core::entities::User;
use qna_core::traits::{NewUser, RepoResult, UserRepository};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

use qna_core::error::DomainError;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, name, profile_image, provider, provider_id, role,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, name, profile_image, provider, provider_id, role,
                   created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (email, name, profile_image, provider, provider_id, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            RETURNING id, email, name, profile_image, provider, provider_id, role,
                      created_at, updated_at
            ",
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.profile_image)
        .bind(user.provider.as_str())
        .bind(&user.provider_id)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        User::try_from(model)
    }

    #[instrument(skip(self))]
    async fn update_profile(
        &self,
        id: i64,
        name: &str,
        profile_image: Option<&str>,
    ) -> RepoResult<User> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users
            SET name = $2, profile_image = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, name, profile_image, provider, provider_id, role,
                      created_at, updated_at
            ",
        )
        .bind(id)
        .bind(name)
        .bind(profile_image)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let model = result.ok_or_else(|| user_not_found(id))?;
        User::try_from(model)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // The user's question reactions keep their denormalized counters in
        // sync before the cascade removes the fact rows. Reactions on the
        // user's own answers disappear together with the answers, so only
        // the question counters need the adjustment.
        sqlx::query(
            r"
            UPDATE questions q
            SET lgtm_count = GREATEST(q.lgtm_count - 1, 0), updated_at = NOW()
            FROM reactions r
            WHERE r.user_id = $1 AND r.question_id = q.id
            ",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            UPDATE answers a
            SET lgtm_count = GREATEST(a.lgtm_count - 1, 0), updated_at = NOW()
            FROM reactions r
            WHERE r.user_id = $1 AND r.answer_id = a.id AND a.user_id <> $1
            ",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM users WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}

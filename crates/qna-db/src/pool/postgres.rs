//! PostgreSQL connection pool construction
//!
//! Connection coordinates come from the application config layer; this
//! module only turns them into a sized pool.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Sizing settings for the connection pool
#[derive(Debug, Clone)]
pub struct PoolConfig {
    url: String,
    max_connections: u32,
    min_connections: u32,
}

impl PoolConfig {
    /// Pool settings for the given connection URL
    pub fn new(url: impl Into<String>, max_connections: u32, min_connections: u32) -> Self {
        Self {
            url: url.into(),
            max_connections,
            min_connections,
        }
    }

    /// Open a connection pool with these settings and stock timeouts
    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .idle_timeout(IDLE_TIMEOUT)
            .max_lifetime(MAX_LIFETIME)
            .connect(&self.url)
            .await
    }
}

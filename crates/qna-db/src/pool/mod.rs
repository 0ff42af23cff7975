//! Database connection pool management

mod postgres;

pub use postgres::PoolConfig;

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;

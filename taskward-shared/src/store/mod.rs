/// Persistence layer
///
/// `Store` is an explicitly constructed handle over the connection pool;
/// services receive a clone of it at construction time. Every operation is
/// one parameterized SQL statement, and driver errors are translated here
/// into the two store-level sentinels the services understand:
///
/// - `DuplicateEntry`: a uniqueness constraint was violated
/// - `NotFound`: no row matched the identity
///
/// Everything else passes through as an opaque `Database` error. Writes set
/// `created_at`/`updated_at` with `NOW()` inside the statement; timestamps
/// are never supplied by callers.

mod employee;
mod hospital;
mod task;

use sqlx::PgPool;
use thiserror::Error;

/// Store-level error sentinels
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated
    #[error("duplicate entry")]
    DuplicateEntry,

    /// No row matched
    #[error("not found")]
    NotFound,

    /// Any other driver failure, opaque to upper layers
    #[error("database error")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::DuplicateEntry
            }
            other => StoreError::Database(other),
        }
    }
}

/// Handle over the three entity tables
///
/// Cloning is cheap (the pool is reference-counted), so each service holds
/// its own copy.
#[derive(Debug, Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Creates a store over an already-connected pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool, for health checks and test scaffolding
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

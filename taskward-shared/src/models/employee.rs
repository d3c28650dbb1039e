/// Employee model
///
/// An employee belongs to exactly one hospital for its lifetime; there is
/// no transfer or update operation. Usernames are globally unique, enforced
/// by the store's unique constraint.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE employee (
///     id BIGSERIAL PRIMARY KEY,
///     hospital_id BIGINT NOT NULL REFERENCES hospital(id),
///     username TEXT NOT NULL UNIQUE,
///     first_name TEXT NOT NULL DEFAULT '',
///     last_name TEXT NOT NULL DEFAULT '',
///     created_at TIMESTAMPTZ NOT NULL,
///     updated_at TIMESTAMPTZ NOT NULL
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employee record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Surrogate identity
    pub id: i64,

    /// Owning hospital
    pub hospital_id: i64,

    /// Globally unique username
    pub username: String,

    pub first_name: String,

    pub last_name: String,

    /// When the employee was created (set by the store)
    pub created_at: DateTime<Utc>,

    /// When the employee was last updated (set by the store)
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new employee
#[derive(Debug, Clone)]
pub struct NewEmployee {
    /// Owning hospital (must exist; verified by the handler)
    pub hospital_id: i64,

    /// Globally unique username (non-empty, validated by the handler)
    pub username: String,

    pub first_name: String,

    pub last_name: String,
}

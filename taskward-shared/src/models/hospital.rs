/// Hospital model
///
/// Hospitals are the root tenant: employees and tasks belong to exactly one
/// hospital. The name is unique across the system and enforced by the
/// store's unique constraint, never pre-checked in process.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE hospital (
///     id BIGSERIAL PRIMARY KEY,
///     name TEXT NOT NULL UNIQUE,
///     display_name TEXT NOT NULL DEFAULT '',
///     created_at TIMESTAMPTZ NOT NULL,
///     updated_at TIMESTAMPTZ NOT NULL
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hospital record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    /// Surrogate identity
    pub id: i64,

    /// Unique machine name
    pub name: String,

    /// Human-readable name
    pub display_name: String,

    /// When the hospital was created (set by the store)
    pub created_at: DateTime<Utc>,

    /// When the hospital was last updated (set by the store)
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new hospital
#[derive(Debug, Clone)]
pub struct NewHospital {
    /// Unique machine name (non-empty, validated by the handler)
    pub name: String,

    /// Human-readable name
    pub display_name: String,
}

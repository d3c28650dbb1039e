/// Task model
///
/// Tasks are owned by an employee and scoped to that employee's hospital;
/// `hospital_id` must equal the owner's hospital at creation and at
/// re-assignment. Priority and status are closed enums stored as text and
/// validated at the handler boundary before anything reaches the store.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE task (
///     id BIGSERIAL PRIMARY KEY,
///     hospital_id BIGINT NOT NULL REFERENCES hospital(id),
///     owner_id BIGINT NOT NULL REFERENCES employee(id),
///     title TEXT NOT NULL,
///     description TEXT NOT NULL DEFAULT '',
///     priority TEXT NOT NULL,
///     status TEXT NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL,
///     updated_at TIMESTAMPTZ NOT NULL
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string is not a member of one of the task enums
#[derive(Debug, Clone, Error)]
#[error("not a valid {kind}: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskPriority {
    Urgent,
    High,
    Low,
}

impl TaskPriority {
    /// Converts priority to its stored/wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Urgent => "URGENT",
            TaskPriority::High => "HIGH",
            TaskPriority::Low => "LOW",
        }
    }

    /// Parses priority from its stored/wire form
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "URGENT" => Some(TaskPriority::Urgent),
            "HIGH" => Some(TaskPriority::High),
            "LOW" => Some(TaskPriority::Low),
            _ => None,
        }
    }
}

impl TryFrom<String> for TaskPriority {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TaskPriority::from_str(&value).ok_or(ParseEnumError {
            kind: "task priority",
            value,
        })
    }
}

/// Task status
///
/// Every task starts OPEN; the server forces this on creation regardless of
/// the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    Open,
    Failed,
    Completed,
}

impl TaskStatus {
    /// Converts status to its stored/wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "OPEN",
            TaskStatus::Failed => "FAILED",
            TaskStatus::Completed => "COMPLETED",
        }
    }

    /// Parses status from its stored/wire form
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "OPEN" => Some(TaskStatus::Open),
            "FAILED" => Some(TaskStatus::Failed),
            "COMPLETED" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TaskStatus::from_str(&value).ok_or(ParseEnumError {
            kind: "task status",
            value,
        })
    }
}

/// Task record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Surrogate identity
    pub id: i64,

    /// Hospital the task is scoped to (equals the owner's hospital)
    pub hospital_id: i64,

    /// Owning employee
    pub owner_id: i64,

    pub title: String,

    pub description: String,

    #[sqlx(try_from = "String")]
    pub priority: TaskPriority,

    #[sqlx(try_from = "String")]
    pub status: TaskStatus,

    /// When the task was created (set by the store)
    pub created_at: DateTime<Utc>,

    /// When the task was last updated (set by the store)
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new task
#[derive(Debug, Clone)]
pub struct NewTask {
    /// Hospital from the request path
    pub hospital_id: i64,

    /// Owning employee (must belong to `hospital_id`; verified by the handler)
    pub owner_id: i64,

    pub title: String,

    pub description: String,

    pub priority: TaskPriority,

    /// Always `TaskStatus::Open` on creation
    pub status: TaskStatus,
}

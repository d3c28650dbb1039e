/// Canonical entity records
///
/// One record struct per entity serves both storage (`sqlx::FromRow`) and
/// the wire (`serde` with camelCase keys). The `New*` companion structs are
/// the validated inputs the services hand to the store.
///
/// # Models
///
/// - `hospital`: Root tenant; owns employees and tasks transitively
/// - `employee`: Belongs to exactly one hospital, immutable after creation
/// - `task`: Owned by an employee, carries priority and status enums

pub mod employee;
pub mod hospital;
pub mod task;

use serde::{Deserialize, Serialize};

/// List envelope returned by every paginated endpoint
///
/// `total` is the count of all rows matching the filter, independent of the
/// page actually returned. The count and the page are two separate queries,
/// so they can disagree under concurrent writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total rows matching the filter
    pub total: u64,

    /// The requested page, ordered by id ascending
    pub items: Vec<T>,
}

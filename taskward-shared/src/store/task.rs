/// Task table operations
///
/// Tasks page by hospital and by owner; both orderings are ascending by id
/// so pagination is stable.

use super::{Store, StoreError};
use crate::models::task::{NewTask, Task};

impl Store {
    /// Inserts a task and returns the stored row
    pub async fn create_task(&self, new: NewTask) -> Result<Task, StoreError> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO task (hospital_id, owner_id, title, description, priority, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            RETURNING id, hospital_id, owner_id, title, description, priority, status, created_at, updated_at
            "#,
        )
        .bind(new.hospital_id)
        .bind(new.owner_id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.priority.as_str())
        .bind(new.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    /// Fetches a task by id
    ///
    /// Fails with `StoreError::NotFound` when no row matches.
    pub async fn get_task(&self, id: i64) -> Result<Task, StoreError> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, hospital_id, owner_id, title, description, priority, status, created_at, updated_at
            FROM task
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        task.ok_or(StoreError::NotFound)
    }

    /// Returns a page of a hospital's tasks in ascending-id order
    pub async fn find_tasks_by_hospital(
        &self,
        hospital_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Task>, StoreError> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, hospital_id, owner_id, title, description, priority, status, created_at, updated_at
            FROM task
            WHERE hospital_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(hospital_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    /// Counts a hospital's tasks
    pub async fn count_tasks_by_hospital(&self, hospital_id: i64) -> Result<u64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM task WHERE hospital_id = $1")
            .bind(hospital_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }

    /// Returns a page of an employee's tasks in ascending-id order
    pub async fn find_tasks_by_owner(
        &self,
        owner_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Task>, StoreError> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, hospital_id, owner_id, title, description, priority, status, created_at, updated_at
            FROM task
            WHERE owner_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    /// Counts an employee's tasks
    pub async fn count_tasks_by_owner(&self, owner_id: i64) -> Result<u64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM task WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }

    /// Overwrites the mutable fields of an existing task
    ///
    /// `hospital_id` is deliberately not in the SET list; a task never
    /// changes hospital. Returns the number of rows affected; 0 means the
    /// id does not exist and is not an error at this layer.
    pub async fn update_task(&self, task: &Task) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE task
            SET owner_id = $2, title = $3, description = $4, priority = $5, status = $6, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(task.id)
        .bind(task.owner_id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.priority.as_str())
        .bind(task.status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

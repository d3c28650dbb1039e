/// Employee table operations
///
/// Employees are immutable after creation; there is no update statement.

use super::{Store, StoreError};
use crate::models::employee::{Employee, NewEmployee};

impl Store {
    /// Inserts an employee and returns the stored row
    ///
    /// Fails with `StoreError::DuplicateEntry` when the username is taken.
    pub async fn create_employee(&self, new: NewEmployee) -> Result<Employee, StoreError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employee (hospital_id, username, first_name, last_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, hospital_id, username, first_name, last_name, created_at, updated_at
            "#,
        )
        .bind(new.hospital_id)
        .bind(&new.username)
        .bind(&new.first_name)
        .bind(&new.last_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(employee)
    }

    /// Fetches an employee by id
    ///
    /// Fails with `StoreError::NotFound` when no row matches.
    pub async fn get_employee(&self, id: i64) -> Result<Employee, StoreError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, hospital_id, username, first_name, last_name, created_at, updated_at
            FROM employee
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        employee.ok_or(StoreError::NotFound)
    }

    /// Returns a page of a hospital's employees in ascending-id order
    pub async fn find_employees(
        &self,
        hospital_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Employee>, StoreError> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, hospital_id, username, first_name, last_name, created_at, updated_at
            FROM employee
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

        Ok(employees)
    }

    /// Counts a hospital's employees
    pub async fn count_employees(&self, hospital_id: i64) -> Result<u64, StoreError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM employee WHERE hospital_id = $1")
                .bind(hospital_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count as u64)
    }
}

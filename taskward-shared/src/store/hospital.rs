/// Hospital table operations

use super::{Store, StoreError};
use crate::models::hospital::{Hospital, NewHospital};

impl Store {
    /// Inserts a hospital and returns the stored row
    ///
    /// Fails with `StoreError::DuplicateEntry` when the name is taken.
    pub async fn create_hospital(&self, new: NewHospital) -> Result<Hospital, StoreError> {
        let hospital = sqlx::query_as::<_, Hospital>(
            r#"
            INSERT INTO hospital (name, display_name, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, name, display_name, created_at, updated_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.display_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(hospital)
    }

    /// Fetches a hospital by id
    ///
    /// Fails with `StoreError::NotFound` when no row matches.
    pub async fn get_hospital(&self, id: i64) -> Result<Hospital, StoreError> {
        let hospital = sqlx::query_as::<_, Hospital>(
            r#"
            SELECT id, name, display_name, created_at, updated_at
            FROM hospital
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        hospital.ok_or(StoreError::NotFound)
    }

    /// Returns a page of hospitals in ascending-id order
    ///
    /// `offset`/`limit` are raw row-skip/row-count; no upper bound is
    /// enforced at this layer.
    pub async fn find_hospitals(&self, offset: i64, limit: i64) -> Result<Vec<Hospital>, StoreError> {
        let hospitals = sqlx::query_as::<_, Hospital>(
            r#"
            SELECT id, name, display_name, created_at, updated_at
            FROM hospital
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(hospitals)
    }

    /// Counts all hospitals
    pub async fn count_hospitals(&self) -> Result<u64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hospital")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }

    /// Overwrites name/display_name for an existing hospital
    ///
    /// Returns the number of rows affected; 0 means the id does not exist
    /// and is not an error at this layer.
    pub async fn update_hospital(&self, hospital: &Hospital) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE hospital
            SET name = $2, display_name = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(hospital.id)
        .bind(&hospital.name)
        .bind(&hospital.display_name)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

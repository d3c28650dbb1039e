/// Task service

use super::ServiceError;
use taskward_shared::models::task::{NewTask, Task};
use taskward_shared::models::Page;
use taskward_shared::store::{Store, StoreError};

#[derive(Debug, Clone)]
pub struct TaskService {
    store: Store,
}

impl TaskService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Creates a task
    ///
    /// The task table carries no uniqueness constraint, so the only
    /// failures here are unclassified store errors.
    pub async fn create(&self, new: NewTask) -> Result<Task, ServiceError> {
        Ok(self.store.create_task(new).await?)
    }

    /// Fetches a task by id
    pub async fn get(&self, id: i64) -> Result<Task, ServiceError> {
        match self.store.get_task(id).await {
            Ok(task) => Ok(task),
            Err(StoreError::NotFound) => {
                Err(ServiceError::ResourceNotFound(format!("invalid id: {id}")))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Lists a hospital's tasks: a count plus a page fetch
    pub async fn list_by_hospital(
        &self,
        hospital_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Page<Task>, ServiceError> {
        let total = self.store.count_tasks_by_hospital(hospital_id).await?;
        let items = self
            .store
            .find_tasks_by_hospital(hospital_id, offset, limit)
            .await?;
        Ok(Page { total, items })
    }

    /// Lists an employee's tasks: a count plus a page fetch
    pub async fn list_by_owner(
        &self,
        owner_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Page<Task>, ServiceError> {
        let total = self.store.count_tasks_by_owner(owner_id).await?;
        let items = self.store.find_tasks_by_owner(owner_id, offset, limit).await?;
        Ok(Page { total, items })
    }

    /// Persists an already-merged task record
    ///
    /// The handler fetches the current record and overwrites the mutable
    /// fields; this only turns "0 rows affected" into `ResourceNotFound`.
    pub async fn update(&self, task: &Task) -> Result<(), ServiceError> {
        let affected = self.store.update_task(task).await?;
        if affected == 0 {
            return Err(ServiceError::ResourceNotFound(format!(
                "invalid id: {}",
                task.id
            )));
        }
        Ok(())
    }
}

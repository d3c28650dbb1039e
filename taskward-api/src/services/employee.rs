/// Employee service
///
/// Employees are immutable after creation; the service has no update path.

use super::ServiceError;
use taskward_shared::models::employee::{Employee, NewEmployee};
use taskward_shared::models::Page;
use taskward_shared::store::{Store, StoreError};

#[derive(Debug, Clone)]
pub struct EmployeeService {
    store: Store,
}

impl EmployeeService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Creates an employee
    ///
    /// A taken username surfaces as `AlreadyExists`.
    pub async fn create(&self, new: NewEmployee) -> Result<Employee, ServiceError> {
        match self.store.create_employee(new.clone()).await {
            Ok(employee) => Ok(employee),
            Err(StoreError::DuplicateEntry) => Err(ServiceError::AlreadyExists(format!(
                "username exists: {}",
                new.username
            ))),
            Err(err) => Err(err.into()),
        }
    }

    /// Fetches an employee by id
    pub async fn get(&self, id: i64) -> Result<Employee, ServiceError> {
        match self.store.get_employee(id).await {
            Ok(employee) => Ok(employee),
            Err(StoreError::NotFound) => {
                Err(ServiceError::ResourceNotFound(format!("invalid id: {id}")))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Lists a hospital's employees: a count plus a page fetch
    pub async fn list(
        &self,
        hospital_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Page<Employee>, ServiceError> {
        let total = self.store.count_employees(hospital_id).await?;
        let items = self.store.find_employees(hospital_id, offset, limit).await?;
        Ok(Page { total, items })
    }
}

/// Hospital service

use super::ServiceError;
use taskward_shared::models::hospital::{Hospital, NewHospital};
use taskward_shared::models::Page;
use taskward_shared::store::{Store, StoreError};

#[derive(Debug, Clone)]
pub struct HospitalService {
    store: Store,
}

impl HospitalService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Creates a hospital
    ///
    /// A taken name surfaces as `AlreadyExists`; uniqueness is enforced by
    /// the store's constraint, not pre-checked.
    pub async fn create(&self, new: NewHospital) -> Result<Hospital, ServiceError> {
        match self.store.create_hospital(new.clone()).await {
            Ok(hospital) => Ok(hospital),
            Err(StoreError::DuplicateEntry) => Err(ServiceError::AlreadyExists(format!(
                "hospital name exists: {}",
                new.name
            ))),
            Err(err) => Err(err.into()),
        }
    }

    /// Fetches a hospital by id
    pub async fn get(&self, id: i64) -> Result<Hospital, ServiceError> {
        match self.store.get_hospital(id).await {
            Ok(hospital) => Ok(hospital),
            Err(StoreError::NotFound) => {
                Err(ServiceError::ResourceNotFound(format!("invalid id: {id}")))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Lists hospitals: a count plus a page fetch
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Page<Hospital>, ServiceError> {
        let total = self.store.count_hospitals().await?;
        let items = self.store.find_hospitals(offset, limit).await?;
        Ok(Page { total, items })
    }

    /// Persists an already-merged hospital record
    ///
    /// The handler fetches the current record and merges the mutable
    /// fields; this only turns "0 rows affected" into `ResourceNotFound`.
    pub async fn update(&self, hospital: &Hospital) -> Result<(), ServiceError> {
        let affected = self.store.update_hospital(hospital).await?;
        if affected == 0 {
            return Err(ServiceError::ResourceNotFound(format!(
                "invalid id: {}",
                hospital.id
            )));
        }
        Ok(())
    }
}

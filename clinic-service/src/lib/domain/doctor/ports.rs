use async_trait::async_trait;

use crate::domain::doctor::errors::DoctorError;
use crate::domain::doctor::models::Doctor;
use crate::domain::doctor::models::DoctorDetails;
use crate::domain::doctor::models::DoctorId;

/// Port for doctor record service operations.
#[async_trait]
pub trait DoctorServicePort: Send + Sync + 'static {
    async fn create_doctor(&self, details: DoctorDetails) -> Result<Doctor, DoctorError>;

    async fn list_doctors(&self) -> Result<Vec<Doctor>, DoctorError>;

    /// # Errors
    /// * `NotFound` - Doctor does not exist
    async fn get_doctor(&self, id: &DoctorId) -> Result<Doctor, DoctorError>;

    /// Replace all details of an existing doctor.
    ///
    /// # Errors
    /// * `NotFound` - Doctor does not exist
    async fn update_doctor(
        &self,
        id: &DoctorId,
        details: DoctorDetails,
    ) -> Result<Doctor, DoctorError>;

    /// # Errors
    /// * `NotFound` - Doctor does not exist
    async fn delete_doctor(&self, id: &DoctorId) -> Result<(), DoctorError>;
}

/// Persistence operations for the doctor aggregate.
#[async_trait]
pub trait DoctorRepository: Send + Sync + 'static {
    async fn create(&self, doctor: Doctor) -> Result<Doctor, DoctorError>;

    async fn find_by_id(&self, id: &DoctorId) -> Result<Option<Doctor>, DoctorError>;

    async fn list_all(&self) -> Result<Vec<Doctor>, DoctorError>;

    async fn update(&self, doctor: Doctor) -> Result<Doctor, DoctorError>;

    async fn delete(&self, id: &DoctorId) -> Result<(), DoctorError>;
}

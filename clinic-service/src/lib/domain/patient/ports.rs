use async_trait::async_trait;

use crate::domain::patient::errors::PatientError;
use crate::domain::patient::models::Patient;
use crate::domain::patient::models::PatientDetails;
use crate::domain::patient::models::PatientId;

/// Port for patient record service operations.
#[async_trait]
pub trait PatientServicePort: Send + Sync + 'static {
    async fn create_patient(&self, details: PatientDetails) -> Result<Patient, PatientError>;

    async fn list_patients(&self) -> Result<Vec<Patient>, PatientError>;

    /// # Errors
    /// * `NotFound` - Patient does not exist
    async fn get_patient(&self, id: &PatientId) -> Result<Patient, PatientError>;

    /// Replace all details of an existing patient.
    ///
    /// # Errors
    /// * `NotFound` - Patient does not exist
    async fn update_patient(
        &self,
        id: &PatientId,
        details: PatientDetails,
    ) -> Result<Patient, PatientError>;

    /// # Errors
    /// * `NotFound` - Patient does not exist
    async fn delete_patient(&self, id: &PatientId) -> Result<(), PatientError>;
}

/// Persistence operations for the patient aggregate.
#[async_trait]
pub trait PatientRepository: Send + Sync + 'static {
    async fn create(&self, patient: Patient) -> Result<Patient, PatientError>;

    async fn find_by_id(&self, id: &PatientId) -> Result<Option<Patient>, PatientError>;

    async fn list_all(&self) -> Result<Vec<Patient>, PatientError>;

    async fn update(&self, patient: Patient) -> Result<Patient, PatientError>;

    async fn delete(&self, id: &PatientId) -> Result<(), PatientError>;
}

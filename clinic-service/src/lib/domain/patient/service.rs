use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::patient::errors::PatientError;
use crate::domain::patient::models::Patient;
use crate::domain::patient::models::PatientDetails;
use crate::domain::patient::models::PatientId;
use crate::domain::patient::ports::PatientRepository;
use crate::domain::patient::ports::PatientServicePort;

/// Domain service implementation for patient record operations.
pub struct PatientService<R>
where
    R: PatientRepository,
{
    repository: Arc<R>,
}

impl<R> PatientService<R>
where
    R: PatientRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatientServicePort for PatientService<R>
where
    R: PatientRepository,
{
    async fn create_patient(&self, details: PatientDetails) -> Result<Patient, PatientError> {
        let patient = Patient {
            id: PatientId::new(),
            first_name: details.first_name,
            last_name: details.last_name,
            date_of_birth: details.date_of_birth,
            gender: details.gender,
            phone_number: details.phone_number,
            email: details.email,
            created_at: Utc::now(),
        };

        self.repository.create(patient).await
    }

    async fn list_patients(&self) -> Result<Vec<Patient>, PatientError> {
        self.repository.list_all().await
    }

    async fn get_patient(&self, id: &PatientId) -> Result<Patient, PatientError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PatientError::NotFound(id.to_string()))
    }

    async fn update_patient(
        &self,
        id: &PatientId,
        details: PatientDetails,
    ) -> Result<Patient, PatientError> {
        let mut patient = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PatientError::NotFound(id.to_string()))?;

        patient.first_name = details.first_name;
        patient.last_name = details.last_name;
        patient.date_of_birth = details.date_of_birth;
        patient.gender = details.gender;
        patient.phone_number = details.phone_number;
        patient.email = details.email;

        self.repository.update(patient).await
    }

    async fn delete_patient(&self, id: &PatientId) -> Result<(), PatientError> {
        self.repository.delete(id).await
    }
}

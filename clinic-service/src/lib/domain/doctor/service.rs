use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::doctor::errors::DoctorError;
use crate::domain::doctor::models::Doctor;
use crate::domain::doctor::models::DoctorDetails;
use crate::domain::doctor::models::DoctorId;
use crate::domain::doctor::ports::DoctorRepository;
use crate::domain::doctor::ports::DoctorServicePort;

/// Domain service implementation for doctor record operations.
pub struct DoctorService<R>
where
    R: DoctorRepository,
{
    repository: Arc<R>,
}

impl<R> DoctorService<R>
where
    R: DoctorRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DoctorServicePort for DoctorService<R>
where
    R: DoctorRepository,
{
    async fn create_doctor(&self, details: DoctorDetails) -> Result<Doctor, DoctorError> {
        let doctor = Doctor {
            id: DoctorId::new(),
            first_name: details.first_name,
            last_name: details.last_name,
            specialization: details.specialization,
            phone_number: details.phone_number,
            email: details.email,
            created_at: Utc::now(),
        };

        self.repository.create(doctor).await
    }

    async fn list_doctors(&self) -> Result<Vec<Doctor>, DoctorError> {
        self.repository.list_all().await
    }

    async fn get_doctor(&self, id: &DoctorId) -> Result<Doctor, DoctorError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DoctorError::NotFound(id.to_string()))
    }

    async fn update_doctor(
        &self,
        id: &DoctorId,
        details: DoctorDetails,
    ) -> Result<Doctor, DoctorError> {
        let mut doctor = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(DoctorError::NotFound(id.to_string()))?;

        doctor.first_name = details.first_name;
        doctor.last_name = details.last_name;
        doctor.specialization = details.specialization;
        doctor.phone_number = details.phone_number;
        doctor.email = details.email;

        self.repository.update(doctor).await
    }

    async fn delete_doctor(&self, id: &DoctorId) -> Result<(), DoctorError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestDoctorRepository {}

        #[async_trait]
        impl DoctorRepository for TestDoctorRepository {
            async fn create(&self, doctor: Doctor) -> Result<Doctor, DoctorError>;
            async fn find_by_id(&self, id: &DoctorId) -> Result<Option<Doctor>, DoctorError>;
            async fn list_all(&self) -> Result<Vec<Doctor>, DoctorError>;
            async fn update(&self, doctor: Doctor) -> Result<Doctor, DoctorError>;
            async fn delete(&self, id: &DoctorId) -> Result<(), DoctorError>;
        }
    }

    fn details() -> DoctorDetails {
        DoctorDetails {
            first_name: "Gregory".to_string(),
            last_name: "House".to_string(),
            specialization: "Diagnostics".to_string(),
            phone_number: "555-0100".to_string(),
            email: "house@clinic.example".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_doctor() {
        let mut repository = MockTestDoctorRepository::new();

        repository
            .expect_create()
            .withf(|doctor| doctor.last_name == "House" && doctor.specialization == "Diagnostics")
            .times(1)
            .returning(|doctor| Ok(doctor));

        let service = DoctorService::new(Arc::new(repository));

        let doctor = service.create_doctor(details()).await.unwrap();
        assert_eq!(doctor.first_name, "Gregory");
    }

    #[tokio::test]
    async fn test_get_doctor_not_found() {
        let mut repository = MockTestDoctorRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = DoctorService::new(Arc::new(repository));

        let result = service.get_doctor(&DoctorId::new()).await;
        assert!(matches!(result.unwrap_err(), DoctorError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_doctor_replaces_all_fields() {
        let mut repository = MockTestDoctorRepository::new();

        let id = DoctorId::new();
        let existing = Doctor {
            id,
            first_name: "James".to_string(),
            last_name: "Wilson".to_string(),
            specialization: "Oncology".to_string(),
            phone_number: "555-0199".to_string(),
            email: "wilson@clinic.example".to_string(),
            created_at: Utc::now(),
        };

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .withf(move |candidate| *candidate == id)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        repository
            .expect_update()
            .withf(|doctor| doctor.last_name == "House")
            .times(1)
            .returning(|doctor| Ok(doctor));

        let service = DoctorService::new(Arc::new(repository));

        let updated = service.update_doctor(&id, details()).await.unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.specialization, "Diagnostics");
    }
}

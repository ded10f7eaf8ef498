use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::appointment::errors::AppointmentError;
use crate::domain::appointment::models::Appointment;
use crate::domain::appointment::models::AppointmentDetails;
use crate::domain::appointment::models::AppointmentId;
use crate::domain::appointment::ports::AppointmentRepository;
use crate::domain::appointment::ports::AppointmentServicePort;

/// Domain service implementation for appointment record operations.
///
/// Plain record keeping; no availability or double-booking rules live here.
pub struct AppointmentService<R>
where
    R: AppointmentRepository,
{
    repository: Arc<R>,
}

impl<R> AppointmentService<R>
where
    R: AppointmentRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AppointmentServicePort for AppointmentService<R>
where
    R: AppointmentRepository,
{
    async fn create_appointment(
        &self,
        details: AppointmentDetails,
    ) -> Result<Appointment, AppointmentError> {
        let appointment = Appointment {
            id: AppointmentId::new(),
            patient_id: details.patient_id,
            doctor_id: details.doctor_id,
            scheduled_at: details.scheduled_at,
            status: details.status,
            created_at: Utc::now(),
        };

        self.repository.create(appointment).await
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, AppointmentError> {
        self.repository.list_all().await
    }

    async fn get_appointment(&self, id: &AppointmentId) -> Result<Appointment, AppointmentError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppointmentError::NotFound(id.to_string()))
    }

    async fn update_appointment(
        &self,
        id: &AppointmentId,
        details: AppointmentDetails,
    ) -> Result<Appointment, AppointmentError> {
        let mut appointment = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AppointmentError::NotFound(id.to_string()))?;

        appointment.patient_id = details.patient_id;
        appointment.doctor_id = details.doctor_id;
        appointment.scheduled_at = details.scheduled_at;
        appointment.status = details.status;

        self.repository.update(appointment).await
    }

    async fn delete_appointment(&self, id: &AppointmentId) -> Result<(), AppointmentError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::appointment::models::AppointmentStatus;
    use crate::domain::doctor::models::DoctorId;
    use crate::domain::patient::models::PatientId;

    mock! {
        pub TestAppointmentRepository {}

        #[async_trait]
        impl AppointmentRepository for TestAppointmentRepository {
            async fn create(&self, appointment: Appointment) -> Result<Appointment, AppointmentError>;
            async fn find_by_id(&self, id: &AppointmentId) -> Result<Option<Appointment>, AppointmentError>;
            async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentError>;
            async fn update(&self, appointment: Appointment) -> Result<Appointment, AppointmentError>;
            async fn delete(&self, id: &AppointmentId) -> Result<(), AppointmentError>;
        }
    }

    #[tokio::test]
    async fn test_create_appointment() {
        let mut repository = MockTestAppointmentRepository::new();

        repository
            .expect_create()
            .withf(|appointment| appointment.status == AppointmentStatus::Scheduled)
            .times(1)
            .returning(|appointment| Ok(appointment));

        let service = AppointmentService::new(Arc::new(repository));

        let appointment = service
            .create_appointment(AppointmentDetails {
                patient_id: PatientId::new(),
                doctor_id: DoctorId::new(),
                scheduled_at: Utc::now(),
                status: AppointmentStatus::Scheduled,
            })
            .await
            .unwrap();

        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    }

    #[tokio::test]
    async fn test_create_appointment_unknown_reference() {
        let mut repository = MockTestAppointmentRepository::new();

        repository
            .expect_create()
            .times(1)
            .returning(|_| Err(AppointmentError::UnknownReference));

        let service = AppointmentService::new(Arc::new(repository));

        let result = service
            .create_appointment(AppointmentDetails {
                patient_id: PatientId::new(),
                doctor_id: DoctorId::new(),
                scheduled_at: Utc::now(),
                status: AppointmentStatus::Scheduled,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppointmentError::UnknownReference
        ));
    }

    #[tokio::test]
    async fn test_get_appointment_not_found() {
        let mut repository = MockTestAppointmentRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = AppointmentService::new(Arc::new(repository));

        let result = service.get_appointment(&AppointmentId::new()).await;
        assert!(matches!(result.unwrap_err(), AppointmentError::NotFound(_)));
    }
}

use async_trait::async_trait;

use crate::domain::appointment::errors::AppointmentError;
use crate::domain::appointment::models::Appointment;
use crate::domain::appointment::models::AppointmentDetails;
use crate::domain::appointment::models::AppointmentId;

/// Port for appointment record service operations.
#[async_trait]
pub trait AppointmentServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `UnknownReference` - The doctor or patient does not exist
    async fn create_appointment(
        &self,
        details: AppointmentDetails,
    ) -> Result<Appointment, AppointmentError>;

    async fn list_appointments(&self) -> Result<Vec<Appointment>, AppointmentError>;

    /// # Errors
    /// * `NotFound` - Appointment does not exist
    async fn get_appointment(&self, id: &AppointmentId) -> Result<Appointment, AppointmentError>;

    /// Replace all details of an existing appointment.
    ///
    /// # Errors
    /// * `NotFound` - Appointment does not exist
    /// * `UnknownReference` - The doctor or patient does not exist
    async fn update_appointment(
        &self,
        id: &AppointmentId,
        details: AppointmentDetails,
    ) -> Result<Appointment, AppointmentError>;

    /// # Errors
    /// * `NotFound` - Appointment does not exist
    async fn delete_appointment(&self, id: &AppointmentId) -> Result<(), AppointmentError>;
}

/// Persistence operations for the appointment aggregate.
#[async_trait]
pub trait AppointmentRepository: Send + Sync + 'static {
    async fn create(&self, appointment: Appointment) -> Result<Appointment, AppointmentError>;

    async fn find_by_id(
        &self,
        id: &AppointmentId,
    ) -> Result<Option<Appointment>, AppointmentError>;

    async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentError>;

    async fn update(&self, appointment: Appointment) -> Result<Appointment, AppointmentError>;

    async fn delete(&self, id: &AppointmentId) -> Result<(), AppointmentError>;
}

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::appointment::errors::AppointmentStatusError;
use crate::domain::appointment::models::Appointment;
use crate::domain::appointment::models::AppointmentDetails;
use crate::domain::appointment::models::AppointmentId;
use crate::domain::appointment::models::AppointmentStatus;
use crate::domain::doctor::errors::DoctorIdError;
use crate::domain::doctor::models::DoctorId;
use crate::domain::patient::errors::PatientIdError;
use crate::domain::patient::models::PatientId;
use crate::inbound::http::router::AppState;

pub async fn create_appointment(
    State(state): State<AppState>,
    Json(body): Json<AppointmentRequestBody>,
) -> Result<ApiSuccess<AppointmentData>, ApiError> {
    state
        .appointment_service
        .create_appointment(body.try_into_details()?)
        .await
        .map_err(ApiError::from)
        .map(|ref appointment| ApiSuccess::new(StatusCode::CREATED, appointment.into()))
}

pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AppointmentData>>, ApiError> {
    state
        .appointment_service
        .list_appointments()
        .await
        .map_err(ApiError::from)
        .map(|appointments| {
            ApiSuccess::new(
                StatusCode::OK,
                appointments.iter().map(AppointmentData::from).collect(),
            )
        })
}

pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<AppointmentData>, ApiError> {
    let appointment_id =
        AppointmentId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .appointment_service
        .get_appointment(&appointment_id)
        .await
        .map_err(ApiError::from)
        .map(|ref appointment| ApiSuccess::new(StatusCode::OK, appointment.into()))
}

pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<AppointmentRequestBody>,
) -> Result<ApiSuccess<AppointmentData>, ApiError> {
    let appointment_id =
        AppointmentId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .appointment_service
        .update_appointment(&appointment_id, body.try_into_details()?)
        .await
        .map_err(ApiError::from)
        .map(|ref appointment| ApiSuccess::new(StatusCode::OK, appointment.into()))
}

pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let appointment_id =
        AppointmentId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .appointment_service
        .delete_appointment(&appointment_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

/// HTTP request body for creating or replacing an appointment record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppointmentRequestBody {
    patient_id: String,
    doctor_id: String,
    scheduled_at: DateTime<Utc>,
    status: String,
}

#[derive(Debug, Clone, Error)]
enum ParseAppointmentRequestError {
    #[error("Invalid patient ID: {0}")]
    PatientId(#[from] PatientIdError),

    #[error("Invalid doctor ID: {0}")]
    DoctorId(#[from] DoctorIdError),

    #[error("Invalid status: {0}")]
    Status(#[from] AppointmentStatusError),
}

impl AppointmentRequestBody {
    fn try_into_details(self) -> Result<AppointmentDetails, ParseAppointmentRequestError> {
        let patient_id = PatientId::from_string(&self.patient_id)?;
        let doctor_id = DoctorId::from_string(&self.doctor_id)?;
        let status: AppointmentStatus = self.status.parse()?;
        Ok(AppointmentDetails {
            patient_id,
            doctor_id,
            scheduled_at: self.scheduled_at,
            status,
        })
    }
}

impl From<ParseAppointmentRequestError> for ApiError {
    fn from(err: ParseAppointmentRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentData {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Appointment> for AppointmentData {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id.to_string(),
            patient_id: appointment.patient_id.to_string(),
            doctor_id: appointment.doctor_id.to_string(),
            scheduled_at: appointment.scheduled_at,
            status: appointment.status.as_str().to_string(),
            created_at: appointment.created_at,
        }
    }
}

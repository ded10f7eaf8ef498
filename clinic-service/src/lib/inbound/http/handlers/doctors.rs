use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::doctor::models::Doctor;
use crate::domain::doctor::models::DoctorDetails;
use crate::domain::doctor::models::DoctorId;
use crate::inbound::http::router::AppState;

pub async fn create_doctor(
    State(state): State<AppState>,
    Json(body): Json<DoctorRequestBody>,
) -> Result<ApiSuccess<DoctorData>, ApiError> {
    state
        .doctor_service
        .create_doctor(body.into_details())
        .await
        .map_err(ApiError::from)
        .map(|ref doctor| ApiSuccess::new(StatusCode::CREATED, doctor.into()))
}

pub async fn list_doctors(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<DoctorData>>, ApiError> {
    state
        .doctor_service
        .list_doctors()
        .await
        .map_err(ApiError::from)
        .map(|doctors| {
            ApiSuccess::new(
                StatusCode::OK,
                doctors.iter().map(DoctorData::from).collect(),
            )
        })
}

pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<DoctorData>, ApiError> {
    let doctor_id =
        DoctorId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .doctor_service
        .get_doctor(&doctor_id)
        .await
        .map_err(ApiError::from)
        .map(|ref doctor| ApiSuccess::new(StatusCode::OK, doctor.into()))
}

pub async fn update_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<DoctorRequestBody>,
) -> Result<ApiSuccess<DoctorData>, ApiError> {
    let doctor_id =
        DoctorId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .doctor_service
        .update_doctor(&doctor_id, body.into_details())
        .await
        .map_err(ApiError::from)
        .map(|ref doctor| ApiSuccess::new(StatusCode::OK, doctor.into()))
}

pub async fn delete_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let doctor_id =
        DoctorId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .doctor_service
        .delete_doctor(&doctor_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

/// HTTP request body for creating or replacing a doctor record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DoctorRequestBody {
    first_name: String,
    last_name: String,
    specialization: String,
    phone_number: String,
    email: String,
}

impl DoctorRequestBody {
    fn into_details(self) -> DoctorDetails {
        DoctorDetails {
            first_name: self.first_name,
            last_name: self.last_name,
            specialization: self.specialization,
            phone_number: self.phone_number,
            email: self.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub phone_number: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Doctor> for DoctorData {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.to_string(),
            first_name: doctor.first_name.clone(),
            last_name: doctor.last_name.clone(),
            specialization: doctor.specialization.clone(),
            phone_number: doctor.phone_number.clone(),
            email: doctor.email.clone(),
            created_at: doctor.created_at,
        }
    }
}

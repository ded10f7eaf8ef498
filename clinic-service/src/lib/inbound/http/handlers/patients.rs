use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::patient::models::Patient;
use crate::domain::patient::models::PatientDetails;
use crate::domain::patient::models::PatientId;
use crate::inbound::http::router::AppState;

pub async fn create_patient(
    State(state): State<AppState>,
    Json(body): Json<PatientRequestBody>,
) -> Result<ApiSuccess<PatientData>, ApiError> {
    state
        .patient_service
        .create_patient(body.into_details())
        .await
        .map_err(ApiError::from)
        .map(|ref patient| ApiSuccess::new(StatusCode::CREATED, patient.into()))
}

pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<PatientData>>, ApiError> {
    state
        .patient_service
        .list_patients()
        .await
        .map_err(ApiError::from)
        .map(|patients| {
            ApiSuccess::new(
                StatusCode::OK,
                patients.iter().map(PatientData::from).collect(),
            )
        })
}

pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<PatientData>, ApiError> {
    let patient_id =
        PatientId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .patient_service
        .get_patient(&patient_id)
        .await
        .map_err(ApiError::from)
        .map(|ref patient| ApiSuccess::new(StatusCode::OK, patient.into()))
}

pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PatientRequestBody>,
) -> Result<ApiSuccess<PatientData>, ApiError> {
    let patient_id =
        PatientId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .patient_service
        .update_patient(&patient_id, body.into_details())
        .await
        .map_err(ApiError::from)
        .map(|ref patient| ApiSuccess::new(StatusCode::OK, patient.into()))
}

pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let patient_id =
        PatientId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .patient_service
        .delete_patient(&patient_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

/// HTTP request body for creating or replacing a patient record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatientRequestBody {
    first_name: String,
    last_name: String,
    date_of_birth: NaiveDate,
    gender: String,
    phone_number: String,
    email: String,
}

impl PatientRequestBody {
    fn into_details(self) -> PatientDetails {
        PatientDetails {
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            phone_number: self.phone_number,
            email: self.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub phone_number: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Patient> for PatientData {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id.to_string(),
            first_name: patient.first_name.clone(),
            last_name: patient.last_name.clone(),
            date_of_birth: patient.date_of_birth,
            gender: patient.gender.clone(),
            phone_number: patient.phone_number.clone(),
            email: patient.email.clone(),
            created_at: patient.created_at,
        }
    }
}

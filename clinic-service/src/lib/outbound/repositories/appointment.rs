use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::appointment::errors::AppointmentError;
use crate::domain::appointment::models::Appointment;
use crate::domain::appointment::models::AppointmentId;
use crate::domain::appointment::ports::AppointmentRepository;
use crate::domain::doctor::models::DoctorId;
use crate::domain::patient::models::PatientId;

pub struct PostgresAppointmentRepository {
    pool: PgPool,
}

impl PostgresAppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AppointmentRow {
    id: Uuid,
    patient_id: Uuid,
    doctor_id: Uuid,
    scheduled_at: DateTime<Utc>,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AppointmentRow> for Appointment {
    type Error = AppointmentError;

    fn try_from(row: AppointmentRow) -> Result<Self, Self::Error> {
        Ok(Appointment {
            id: AppointmentId(row.id),
            patient_id: PatientId(row.patient_id),
            doctor_id: DoctorId(row.doctor_id),
            scheduled_at: row.scheduled_at,
            status: row.status.parse()?,
            created_at: row.created_at,
        })
    }
}

fn map_write_error(e: sqlx::Error) -> AppointmentError {
    if let Some(db_err) = e.as_database_error() {
        // Appointments reference doctors and patients by foreign key
        if db_err.is_foreign_key_violation() {
            return AppointmentError::UnknownReference;
        }
    }
    AppointmentError::DatabaseError(e.to_string())
}

#[async_trait]
impl AppointmentRepository for PostgresAppointmentRepository {
    async fn create(&self, appointment: Appointment) -> Result<Appointment, AppointmentError> {
        sqlx::query(
            r#"
            INSERT INTO appointments (id, patient_id, doctor_id, scheduled_at, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(appointment.id.0)
        .bind(appointment.patient_id.0)
        .bind(appointment.doctor_id.0)
        .bind(appointment.scheduled_at)
        .bind(appointment.status.as_str())
        .bind(appointment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(appointment)
    }

    async fn find_by_id(
        &self,
        id: &AppointmentId,
    ) -> Result<Option<Appointment>, AppointmentError> {
        let row: Option<AppointmentRow> = sqlx::query_as(
            r#"
            SELECT id, patient_id, doctor_id, scheduled_at, status, created_at
            FROM appointments
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        row.map(Appointment::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentError> {
        let rows: Vec<AppointmentRow> = sqlx::query_as(
            r#"
            SELECT id, patient_id, doctor_id, scheduled_at, status, created_at
            FROM appointments
            ORDER BY scheduled_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Appointment::try_from).collect()
    }

    async fn update(&self, appointment: Appointment) -> Result<Appointment, AppointmentError> {
        let result = sqlx::query(
            r#"
            UPDATE appointments
            SET patient_id = $2, doctor_id = $3, scheduled_at = $4, status = $5
            WHERE id = $1
            "#,
        )
        .bind(appointment.id.0)
        .bind(appointment.patient_id.0)
        .bind(appointment.doctor_id.0)
        .bind(appointment.scheduled_at)
        .bind(appointment.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(AppointmentError::NotFound(appointment.id.to_string()));
        }

        Ok(appointment)
    }

    async fn delete(&self, id: &AppointmentId) -> Result<(), AppointmentError> {
        let result = sqlx::query(
            r#"
            DELETE FROM appointments
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AppointmentError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::patient::errors::PatientError;
use crate::domain::patient::models::Patient;
use crate::domain::patient::models::PatientId;
use crate::domain::patient::ports::PatientRepository;

pub struct PostgresPatientRepository {
    pool: PgPool,
}

impl PostgresPatientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PatientRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    date_of_birth: NaiveDate,
    gender: String,
    phone_number: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl From<PatientRow> for Patient {
    fn from(row: PatientRow) -> Self {
        Patient {
            id: PatientId(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            date_of_birth: row.date_of_birth,
            gender: row.gender,
            phone_number: row.phone_number,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl PatientRepository for PostgresPatientRepository {
    async fn create(&self, patient: Patient) -> Result<Patient, PatientError> {
        sqlx::query(
            r#"
            INSERT INTO patients (id, first_name, last_name, date_of_birth, gender, phone_number, email, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(patient.id.0)
        .bind(&patient.first_name)
        .bind(&patient.last_name)
        .bind(patient.date_of_birth)
        .bind(&patient.gender)
        .bind(&patient.phone_number)
        .bind(&patient.email)
        .bind(patient.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| PatientError::DatabaseError(e.to_string()))?;

        Ok(patient)
    }

    async fn find_by_id(&self, id: &PatientId) -> Result<Option<Patient>, PatientError> {
        let row: Option<PatientRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, date_of_birth, gender, phone_number, email, created_at
            FROM patients
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PatientError::DatabaseError(e.to_string()))?;

        Ok(row.map(Patient::from))
    }

    async fn list_all(&self) -> Result<Vec<Patient>, PatientError> {
        let rows: Vec<PatientRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, date_of_birth, gender, phone_number, email, created_at
            FROM patients
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PatientError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Patient::from).collect())
    }

    async fn update(&self, patient: Patient) -> Result<Patient, PatientError> {
        let result = sqlx::query(
            r#"
            UPDATE patients
            SET first_name = $2, last_name = $3, date_of_birth = $4, gender = $5, phone_number = $6, email = $7
            WHERE id = $1
            "#,
        )
        .bind(patient.id.0)
        .bind(&patient.first_name)
        .bind(&patient.last_name)
        .bind(patient.date_of_birth)
        .bind(&patient.gender)
        .bind(&patient.phone_number)
        .bind(&patient.email)
        .execute(&self.pool)
        .await
        .map_err(|e| PatientError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PatientError::NotFound(patient.id.to_string()));
        }

        Ok(patient)
    }

    async fn delete(&self, id: &PatientId) -> Result<(), PatientError> {
        let result = sqlx::query(
            r#"
            DELETE FROM patients
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| PatientError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PatientError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

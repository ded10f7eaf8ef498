use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::doctor::errors::DoctorError;
use crate::domain::doctor::models::Doctor;
use crate::domain::doctor::models::DoctorId;
use crate::domain::doctor::ports::DoctorRepository;

pub struct PostgresDoctorRepository {
    pool: PgPool,
}

impl PostgresDoctorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DoctorRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    specialization: String,
    phone_number: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl From<DoctorRow> for Doctor {
    fn from(row: DoctorRow) -> Self {
        Doctor {
            id: DoctorId(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            specialization: row.specialization,
            phone_number: row.phone_number,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl DoctorRepository for PostgresDoctorRepository {
    async fn create(&self, doctor: Doctor) -> Result<Doctor, DoctorError> {
        sqlx::query(
            r#"
            INSERT INTO doctors (id, first_name, last_name, specialization, phone_number, email, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(doctor.id.0)
        .bind(&doctor.first_name)
        .bind(&doctor.last_name)
        .bind(&doctor.specialization)
        .bind(&doctor.phone_number)
        .bind(&doctor.email)
        .bind(doctor.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DoctorError::DatabaseError(e.to_string()))?;

        Ok(doctor)
    }

    async fn find_by_id(&self, id: &DoctorId) -> Result<Option<Doctor>, DoctorError> {
        let row: Option<DoctorRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, specialization, phone_number, email, created_at
            FROM doctors
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DoctorError::DatabaseError(e.to_string()))?;

        Ok(row.map(Doctor::from))
    }

    async fn list_all(&self) -> Result<Vec<Doctor>, DoctorError> {
        let rows: Vec<DoctorRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, specialization, phone_number, email, created_at
            FROM doctors
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DoctorError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Doctor::from).collect())
    }

    async fn update(&self, doctor: Doctor) -> Result<Doctor, DoctorError> {
        let result = sqlx::query(
            r#"
            UPDATE doctors
            SET first_name = $2, last_name = $3, specialization = $4, phone_number = $5, email = $6
            WHERE id = $1
            "#,
        )
        .bind(doctor.id.0)
        .bind(&doctor.first_name)
        .bind(&doctor.last_name)
        .bind(&doctor.specialization)
        .bind(&doctor.phone_number)
        .bind(&doctor.email)
        .execute(&self.pool)
        .await
        .map_err(|e| DoctorError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DoctorError::NotFound(doctor.id.to_string()));
        }

        Ok(doctor)
    }

    async fn delete(&self, id: &DoctorId) -> Result<(), DoctorError> {
        let result = sqlx::query(
            r#"
            DELETE FROM doctors
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| DoctorError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DoctorError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

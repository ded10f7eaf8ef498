use thiserror::Error;

/// Error for PatientId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatientIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for patient record operations
#[derive(Debug, Clone, Error)]
pub enum PatientError {
    #[error("Invalid patient ID: {0}")]
    InvalidPatientId(#[from] PatientIdError),

    #[error("Patient not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

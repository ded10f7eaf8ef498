use thiserror::Error;

/// Error for DoctorId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DoctorIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for doctor record operations
#[derive(Debug, Clone, Error)]
pub enum DoctorError {
    #[error("Invalid doctor ID: {0}")]
    InvalidDoctorId(#[from] DoctorIdError),

    #[error("Doctor not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

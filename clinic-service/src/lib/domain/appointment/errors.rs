use thiserror::Error;

/// Error for AppointmentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppointmentIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for AppointmentStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppointmentStatusError {
    #[error("Unknown status: {0} (expected scheduled, completed, or cancelled)")]
    UnknownStatus(String),
}

/// Top-level error for appointment record operations
#[derive(Debug, Clone, Error)]
pub enum AppointmentError {
    #[error("Invalid appointment ID: {0}")]
    InvalidAppointmentId(#[from] AppointmentIdError),

    #[error("Invalid status: {0}")]
    InvalidStatus(#[from] AppointmentStatusError),

    #[error("Appointment not found: {0}")]
    NotFound(String),

    #[error("Referenced doctor or patient does not exist")]
    UnknownReference,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::doctor::errors::DoctorIdError;

/// Doctor record entity.
#[derive(Debug, Clone)]
pub struct Doctor {
    pub id: DoctorId,
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub phone_number: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Doctor unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoctorId(pub Uuid);

impl DoctorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, DoctorIdError> {
        Uuid::parse_str(s)
            .map(DoctorId)
            .map_err(|e| DoctorIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for DoctorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command carrying the full field set for create and replace operations.
#[derive(Debug, Clone)]
pub struct DoctorDetails {
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub phone_number: String,
    pub email: String,
}

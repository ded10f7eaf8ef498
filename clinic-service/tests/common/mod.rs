use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use clinic_service::domain::account::errors::AccountError;
use clinic_service::domain::account::models::Account;
use clinic_service::domain::account::models::EmailAddress;
use clinic_service::domain::account::ports::AccountRepository;
use clinic_service::domain::account::service::AccountService;
use clinic_service::domain::appointment::errors::AppointmentError;
use clinic_service::domain::appointment::models::Appointment;
use clinic_service::domain::appointment::models::AppointmentId;
use clinic_service::domain::appointment::ports::AppointmentRepository;
use clinic_service::domain::appointment::service::AppointmentService;
use clinic_service::domain::doctor::errors::DoctorError;
use clinic_service::domain::doctor::models::Doctor;
use clinic_service::domain::doctor::models::DoctorId;
use clinic_service::domain::doctor::ports::DoctorRepository;
use clinic_service::domain::doctor::service::DoctorService;
use clinic_service::domain::patient::errors::PatientError;
use clinic_service::domain::patient::models::Patient;
use clinic_service::domain::patient::models::PatientId;
use clinic_service::domain::patient::ports::PatientRepository;
use clinic_service::domain::patient::service::PatientService;
use clinic_service::inbound::http::router::create_router;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server on a random port.
///
/// Repositories are in-memory adapters of the same ports the Postgres
/// implementations satisfy, so the whole HTTP surface runs without a
/// database.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(TEST_SECRET));

        let account_service = Arc::new(AccountService::new(
            Arc::new(InMemoryAccountRepository::new()),
            authenticator,
            1,
        ));
        let doctor_service = Arc::new(DoctorService::new(Arc::new(InMemoryDoctorRepository::new())));
        let patient_service = Arc::new(PatientService::new(Arc::new(
            InMemoryPatientRepository::new(),
        )));
        let appointment_service = Arc::new(AppointmentService::new(Arc::new(
            InMemoryAppointmentRepository::new(),
        )));

        let router = create_router(
            account_service,
            doctor_service,
            patient_service,
            appointment_service,
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register an account and log in, returning the bearer token
    pub async fn register_and_login(&self, email: &str, password: &str, role: &str) -> String {
        let response = self
            .post("/api/auth/register")
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "role": role
            }))
            .send()
            .await
            .expect("Failed to execute register request");
        assert!(response.status().is_success(), "registration failed");

        let response = self
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute login request");
        assert!(response.status().is_success(), "login failed");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("token missing from login response")
            .to_string()
    }
}

/// Credential store keyed by email behind a single lock; the check-and-insert
/// under the lock is what gives concurrent duplicate registrations exactly
/// one winner.
pub struct InMemoryAccountRepository {
    accounts: Mutex<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(account.email.as_str()) {
            return Err(AccountError::EmailAlreadyExists(
                account.email.as_str().to_string(),
            ));
        }
        accounts.insert(account.email.as_str().to_string(), account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, AccountError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.get(email.as_str()).cloned())
    }
}

pub struct InMemoryDoctorRepository {
    doctors: Mutex<HashMap<DoctorId, Doctor>>,
}

impl InMemoryDoctorRepository {
    pub fn new() -> Self {
        Self {
            doctors: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl DoctorRepository for InMemoryDoctorRepository {
    async fn create(&self, doctor: Doctor) -> Result<Doctor, DoctorError> {
        self.doctors
            .lock()
            .unwrap()
            .insert(doctor.id, doctor.clone());
        Ok(doctor)
    }

    async fn find_by_id(&self, id: &DoctorId) -> Result<Option<Doctor>, DoctorError> {
        Ok(self.doctors.lock().unwrap().get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Doctor>, DoctorError> {
        Ok(self.doctors.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, doctor: Doctor) -> Result<Doctor, DoctorError> {
        let mut doctors = self.doctors.lock().unwrap();
        if !doctors.contains_key(&doctor.id) {
            return Err(DoctorError::NotFound(doctor.id.to_string()));
        }
        doctors.insert(doctor.id, doctor.clone());
        Ok(doctor)
    }

    async fn delete(&self, id: &DoctorId) -> Result<(), DoctorError> {
        self.doctors
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or(DoctorError::NotFound(id.to_string()))
    }
}

pub struct InMemoryPatientRepository {
    patients: Mutex<HashMap<PatientId, Patient>>,
}

impl InMemoryPatientRepository {
    pub fn new() -> Self {
        Self {
            patients: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn create(&self, patient: Patient) -> Result<Patient, PatientError> {
        self.patients
            .lock()
            .unwrap()
            .insert(patient.id, patient.clone());
        Ok(patient)
    }

    async fn find_by_id(&self, id: &PatientId) -> Result<Option<Patient>, PatientError> {
        Ok(self.patients.lock().unwrap().get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Patient>, PatientError> {
        Ok(self.patients.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, patient: Patient) -> Result<Patient, PatientError> {
        let mut patients = self.patients.lock().unwrap();
        if !patients.contains_key(&patient.id) {
            return Err(PatientError::NotFound(patient.id.to_string()));
        }
        patients.insert(patient.id, patient.clone());
        Ok(patient)
    }

    async fn delete(&self, id: &PatientId) -> Result<(), PatientError> {
        self.patients
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or(PatientError::NotFound(id.to_string()))
    }
}

pub struct InMemoryAppointmentRepository {
    appointments: Mutex<HashMap<AppointmentId, Appointment>>,
}

impl InMemoryAppointmentRepository {
    pub fn new() -> Self {
        Self {
            appointments: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn create(&self, appointment: Appointment) -> Result<Appointment, AppointmentError> {
        self.appointments
            .lock()
            .unwrap()
            .insert(appointment.id, appointment.clone());
        Ok(appointment)
    }

    async fn find_by_id(
        &self,
        id: &AppointmentId,
    ) -> Result<Option<Appointment>, AppointmentError> {
        Ok(self.appointments.lock().unwrap().get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentError> {
        Ok(self.appointments.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, appointment: Appointment) -> Result<Appointment, AppointmentError> {
        let mut appointments = self.appointments.lock().unwrap();
        if !appointments.contains_key(&appointment.id) {
            return Err(AppointmentError::NotFound(appointment.id.to_string()));
        }
        appointments.insert(appointment.id, appointment.clone());
        Ok(appointment)
    }

    async fn delete(&self, id: &AppointmentId) -> Result<(), AppointmentError> {
        self.appointments
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or(AppointmentError::NotFound(id.to_string()))
    }
}

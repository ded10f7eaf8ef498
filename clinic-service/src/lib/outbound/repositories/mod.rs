pub mod account;
pub mod appointment;
pub mod doctor;
pub mod patient;

pub use account::PostgresAccountRepository;
pub use appointment::PostgresAppointmentRepository;
pub use doctor::PostgresDoctorRepository;
pub use patient::PostgresPatientRepository;

use std::sync::Arc;

use auth::Authenticator;
use clinic_service::config::Config;
use clinic_service::domain::account::service::AccountService;
use clinic_service::domain::appointment::service::AppointmentService;
use clinic_service::domain::doctor::service::DoctorService;
use clinic_service::domain::patient::service::PatientService;
use clinic_service::inbound::http::router::create_router;
use clinic_service::outbound::repositories::PostgresAccountRepository;
use clinic_service::outbound::repositories::PostgresAppointmentRepository;
use clinic_service::outbound::repositories::PostgresDoctorRepository;
use clinic_service::outbound::repositories::PostgresPatientRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinic_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "clinic-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // The signing secret itself stays out of the logs
    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));

    let account_repository = Arc::new(PostgresAccountRepository::new(pg_pool.clone()));
    let doctor_repository = Arc::new(PostgresDoctorRepository::new(pg_pool.clone()));
    let patient_repository = Arc::new(PostgresPatientRepository::new(pg_pool.clone()));
    let appointment_repository = Arc::new(PostgresAppointmentRepository::new(pg_pool));

    let account_service = Arc::new(AccountService::new(
        account_repository,
        authenticator,
        config.jwt.expiration_hours,
    ));
    let doctor_service = Arc::new(DoctorService::new(doctor_repository));
    let patient_service = Arc::new(PatientService::new(patient_repository));
    let appointment_service = Arc::new(AppointmentService::new(appointment_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(
        account_service,
        doctor_service,
        patient_service,
        appointment_service,
    );

    axum::serve(http_listener, application).await?;

    Ok(())
}

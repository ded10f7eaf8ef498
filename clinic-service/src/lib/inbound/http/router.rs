use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::appointments::create_appointment;
use super::handlers::appointments::delete_appointment;
use super::handlers::appointments::get_appointment;
use super::handlers::appointments::list_appointments;
use super::handlers::appointments::update_appointment;
use super::handlers::doctors::create_doctor;
use super::handlers::doctors::delete_doctor;
use super::handlers::doctors::get_doctor;
use super::handlers::doctors::list_doctors;
use super::handlers::doctors::update_doctor;
use super::handlers::login::login;
use super::handlers::patients::create_patient;
use super::handlers::patients::delete_patient;
use super::handlers::patients::get_patient;
use super::handlers::patients::list_patients;
use super::handlers::patients::update_patient;
use super::handlers::register::register;
use super::middleware::authenticate as auth_middleware;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::appointment::ports::AppointmentServicePort;
use crate::domain::doctor::ports::DoctorServicePort;
use crate::domain::patient::ports::PatientServicePort;

/// Application state shared across all handlers.
///
/// Services are held behind their ports, so the same router serves the
/// Postgres-backed binary and the in-memory test harness.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServicePort>,
    pub doctor_service: Arc<dyn DoctorServicePort>,
    pub patient_service: Arc<dyn PatientServicePort>,
    pub appointment_service: Arc<dyn AppointmentServicePort>,
}

pub fn create_router(
    account_service: Arc<dyn AccountServicePort>,
    doctor_service: Arc<dyn DoctorServicePort>,
    patient_service: Arc<dyn PatientServicePort>,
    appointment_service: Arc<dyn AppointmentServicePort>,
) -> Router {
    let state = AppState {
        account_service,
        doctor_service,
        patient_service,
        appointment_service,
    };

    let public_routes = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login));

    // Record routes sit behind token verification; the original system
    // issued tokens but never checked them on these endpoints.
    let protected_routes = Router::new()
        .route("/api/doctors", post(create_doctor).get(list_doctors))
        .route("/api/doctors/:id", get(get_doctor))
        .route("/api/doctors/:id", put(update_doctor))
        .route("/api/doctors/:id", delete(delete_doctor))
        .route("/api/patients", post(create_patient).get(list_patients))
        .route("/api/patients/:id", get(get_patient))
        .route("/api/patients/:id", put(update_patient))
        .route("/api/patients/:id", delete(delete_patient))
        .route(
            "/api/appointments",
            post(create_appointment).get(list_appointments),
        )
        .route("/api/appointments/:id", get(get_appointment))
        .route("/api/appointments/:id", put(update_appointment))
        .route("/api/appointments/:id", delete(delete_appointment))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

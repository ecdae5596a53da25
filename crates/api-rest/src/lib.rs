//! # API REST
//!
//! REST API and HTML page for the clinic directory.
//!
//! Handles:
//! - JSON endpoints with axum
//! - OpenAPI/Swagger documentation
//! - the server-rendered directory page
//! - in-memory view sessions
//!
//! Uses `api-shared` for request/response types and `clinic-core` for all directory logic.

#![warn(rust_2018_idioms)]

pub mod handlers;
pub mod page;
pub mod state;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use state::{AppState, SessionStore};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::list_clinics,
        handlers::get_clinic,
        handlers::list_specialties,
        handlers::book_clinic,
        handlers::emergency,
        handlers::create_session,
        handlers::get_session,
        handlers::delete_session,
        handlers::put_filter,
        handlers::toggle_specialty,
        handlers::put_selection,
        handlers::session_book,
    ),
    components(schemas(
        api_shared::HealthRes,
        api_shared::Clinic,
        api_shared::ListClinicsRes,
        api_shared::SpecialtiesRes,
        api_shared::NotificationRes,
        api_shared::BookingReq,
        api_shared::BookingRes,
        api_shared::EmergencyRes,
        api_shared::Filter,
        api_shared::SelectionReq,
        api_shared::SessionRes,
    ))
)]
pub struct ApiDoc;

/// Builds the full router: HTML page, JSON API and Swagger UI.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/book/:id", post(page::book))
        .route("/emergency-call", post(page::emergency_call))
        .route("/health", get(handlers::health))
        .route("/clinics", get(handlers::list_clinics))
        .route("/clinics/:id", get(handlers::get_clinic))
        .route("/clinics/:id/bookings", post(handlers::book_clinic))
        .route("/specialties", get(handlers::list_specialties))
        .route("/emergency", post(handlers::emergency))
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/:id",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route("/sessions/:id/filter", put(handlers::put_filter))
        .route(
            "/sessions/:id/specialties/:name/toggle",
            post(handlers::toggle_specialty),
        )
        .route("/sessions/:id/selection", put(handlers::put_selection))
        .route(
            "/sessions/:id/bookings/:clinic_id",
            post(handlers::session_book),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

//! JSON endpoints.

use crate::state::AppState;
use api_shared::{
    BookingReq, BookingRes, Clinic, ClinicQuery, EmergencyRes, Filter, HealthRes, HealthService,
    ListClinicsRes, SelectionReq, SessionRes, SpecialtiesRes,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use clinic_core::{
    constants::POPULAR_SPECIALTIES, BookingSelection, ClinicId, FilterState, SelectionScope,
    ViewSession,
};
use uuid::Uuid;

type ApiError = (StatusCode, &'static str);

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/clinics",
    params(ClinicQuery),
    responses(
        (status = 200, description = "Clinics matching the filter, in catalog order", body = ListClinicsRes)
    )
)]
/// List clinics matching the filter query
///
/// Every query parameter is optional; missing ones take the default filter value.
#[axum::debug_handler]
pub async fn list_clinics(
    State(state): State<AppState>,
    Query(query): Query<ClinicQuery>,
) -> Json<ListClinicsRes> {
    let filter = FilterState::from(query);
    let clinics = state.directory.search(&filter);
    Json(ListClinicsRes {
        clinics: clinics.iter().map(Clinic::from).collect(),
    })
}

#[utoipa::path(
    get,
    path = "/clinics/{id}",
    params(("id" = u32, Path, description = "Clinic identifier")),
    responses(
        (status = 200, description = "Clinic found", body = Clinic),
        (status = 404, description = "Clinic not found")
    )
)]
#[axum::debug_handler]
pub async fn get_clinic(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Clinic>, ApiError> {
    match state.directory.clinic(ClinicId::new(id)) {
        Some(clinic) => Ok(Json(Clinic::from(&clinic))),
        None => Err((StatusCode::NOT_FOUND, "Clinic not found")),
    }
}

#[utoipa::path(
    get,
    path = "/specialties",
    responses(
        (status = 200, description = "Selector tags and catalog specialties", body = SpecialtiesRes)
    )
)]
#[axum::debug_handler]
pub async fn list_specialties(State(state): State<AppState>) -> Json<SpecialtiesRes> {
    Json(SpecialtiesRes {
        popular: POPULAR_SPECIALTIES.iter().map(|s| s.to_string()).collect(),
        catalog: state.directory.specialties(),
    })
}

#[utoipa::path(
    post,
    path = "/clinics/{id}/bookings",
    params(("id" = u32, Path, description = "Clinic identifier")),
    request_body = BookingReq,
    responses(
        (status = 200, description = "Booking outcome with notification", body = BookingRes)
    )
)]
/// Attempt a mock booking
///
/// Nothing is stored. A missing date or time yields a `rejected` outcome with an error
/// notification; an unknown clinic yields `not_applicable`.
#[axum::debug_handler]
pub async fn book_clinic(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(req): Json<BookingReq>,
) -> Json<BookingRes> {
    let selection = BookingSelection {
        selected_date: req.date,
        selected_time: req.time,
    };
    let outcome = state.directory.book(ClinicId::new(id), &selection);
    Json(BookingRes::from(&outcome))
}

#[utoipa::path(
    post,
    path = "/emergency",
    responses(
        (status = 200, description = "Telephone URI to navigate to", body = EmergencyRes)
    )
)]
#[axum::debug_handler]
pub async fn emergency(State(state): State<AppState>) -> Json<EmergencyRes> {
    let call = state.directory.emergency_call();
    Json(EmergencyRes::from(&call))
}

#[utoipa::path(
    post,
    path = "/sessions",
    responses(
        (status = 201, description = "Session created", body = SessionRes),
        (status = 503, description = "Session limit reached")
    )
)]
/// Create a view session with the default filter and empty selections
#[axum::debug_handler]
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionRes>), ApiError> {
    let session = state.directory.new_session();
    let id = state
        .sessions
        .insert(session.clone())
        .await
        .ok_or((StatusCode::SERVICE_UNAVAILABLE, "Session limit reached"))?;
    Ok((StatusCode::CREATED, Json(session_res(&state, id, &session))))
}

#[utoipa::path(
    delete,
    path = "/sessions/{id}",
    params(("id" = String, Path, description = "Session identifier")),
    responses(
        (status = 204, description = "Session deleted"),
        (status = 400, description = "Invalid session id"),
        (status = 404, description = "Session not found")
    )
)]
/// Delete a view session
#[axum::debug_handler]
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_session_id(&id)?;
    if state.sessions.remove(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Session not found"))
    }
}

#[utoipa::path(
    get,
    path = "/sessions/{id}",
    params(("id" = String, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Session state and visible clinics", body = SessionRes),
        (status = 400, description = "Invalid session id"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionRes>, ApiError> {
    let id = parse_session_id(&id)?;
    let session = state
        .sessions
        .get(&id)
        .await
        .ok_or((StatusCode::NOT_FOUND, "Session not found"))?;
    Ok(Json(session_res(&state, id, &session)))
}

#[utoipa::path(
    put,
    path = "/sessions/{id}/filter",
    params(("id" = String, Path, description = "Session identifier")),
    request_body = Filter,
    responses(
        (status = 200, description = "Filter replaced", body = SessionRes),
        (status = 400, description = "Invalid session id"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn put_filter(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(filter): Json<Filter>,
) -> Result<Json<SessionRes>, ApiError> {
    let id = parse_session_id(&id)?;
    let filter = FilterState::from(filter);
    let session = update_session(&state, &id, |s| s.set_filter(filter)).await?;
    Ok(Json(session_res(&state, id, &session)))
}

#[utoipa::path(
    post,
    path = "/sessions/{id}/specialties/{name}/toggle",
    params(
        ("id" = String, Path, description = "Session identifier"),
        ("name" = String, Path, description = "Specialty tag")
    ),
    responses(
        (status = 200, description = "Specialty toggled", body = SessionRes),
        (status = 400, description = "Invalid session id"),
        (status = 404, description = "Session not found")
    )
)]
/// Select a specialty, or clear it if it is already selected
#[axum::debug_handler]
pub async fn toggle_specialty(
    State(state): State<AppState>,
    Path((id, name)): Path<(String, String)>,
) -> Result<Json<SessionRes>, ApiError> {
    let id = parse_session_id(&id)?;
    let session = update_session(&state, &id, |s| s.toggle_specialty(&name)).await?;
    Ok(Json(session_res(&state, id, &session)))
}

#[utoipa::path(
    put,
    path = "/sessions/{id}/selection",
    params(("id" = String, Path, description = "Session identifier")),
    request_body = SelectionReq,
    responses(
        (status = 200, description = "Selection updated", body = SessionRes),
        (status = 400, description = "Invalid session id or missing clinic_id"),
        (status = 404, description = "Session or clinic not found")
    )
)]
/// Update the booking date and/or time of a session
///
/// Per-clinic sessions need `clinic_id`; shared sessions ignore it. A `clinic_id` that is not
/// in the catalog is refused.
#[axum::debug_handler]
pub async fn put_selection(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SelectionReq>,
) -> Result<Json<SessionRes>, ApiError> {
    let id = parse_session_id(&id)?;
    let clinic_id = match (state.directory.config().selection_scope(), req.clinic_id) {
        (_, Some(clinic_id)) => {
            let clinic_id = ClinicId::new(clinic_id);
            if state.directory.clinic(clinic_id).is_none() {
                return Err((StatusCode::NOT_FOUND, "Clinic not found"));
            }
            clinic_id
        }
        (SelectionScope::Shared, None) => ClinicId::new(0),
        (SelectionScope::PerClinic, None) => {
            return Err((StatusCode::BAD_REQUEST, "clinic_id is required"));
        }
    };

    let session = update_session(&state, &id, |s| {
        if let Some(date) = req.date {
            s.select_date(clinic_id, Some(date).filter(|d| !d.is_empty()));
        }
        if let Some(time) = req.time {
            s.select_time(clinic_id, Some(time).filter(|t| !t.is_empty()));
        }
    })
    .await?;
    Ok(Json(session_res(&state, id, &session)))
}

#[utoipa::path(
    post,
    path = "/sessions/{id}/bookings/{clinic_id}",
    params(
        ("id" = String, Path, description = "Session identifier"),
        ("clinic_id" = u32, Path, description = "Clinic identifier")
    ),
    responses(
        (status = 200, description = "Booking outcome with notification", body = BookingRes),
        (status = 400, description = "Invalid session id"),
        (status = 404, description = "Session not found")
    )
)]
/// Attempt a mock booking using the session's selection
#[axum::debug_handler]
pub async fn session_book(
    State(state): State<AppState>,
    Path((id, clinic_id)): Path<(String, u32)>,
) -> Result<Json<BookingRes>, ApiError> {
    let id = parse_session_id(&id)?;
    let session = state
        .sessions
        .get(&id)
        .await
        .ok_or((StatusCode::NOT_FOUND, "Session not found"))?;
    let outcome = session.book(state.directory.catalog(), ClinicId::new(clinic_id));
    Ok(Json(BookingRes::from(&outcome)))
}

fn parse_session_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|e| {
        tracing::error!("Invalid session id {:?}: {:?}", id, e);
        (StatusCode::BAD_REQUEST, "Invalid session id")
    })
}

async fn update_session<F>(state: &AppState, id: &Uuid, f: F) -> Result<ViewSession, ApiError>
where
    F: FnOnce(&mut ViewSession),
{
    state
        .sessions
        .update(id, f)
        .await
        .ok_or((StatusCode::NOT_FOUND, "Session not found"))
}

fn session_res(state: &AppState, id: Uuid, session: &ViewSession) -> SessionRes {
    let clinics = session.visible_clinics(state.directory.catalog());
    SessionRes::new(id.to_string(), session, &clinics)
}

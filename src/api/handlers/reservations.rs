//! Reservation handlers: list, create, and the orphan report.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    CreateReservationRequest, CreateReservationResponse, OrphanedReservationsResponse,
    ReservationListResponse, parse_stay,
};
use crate::api::extract::JsonBody;
use crate::app_state::AppState;
use crate::domain::NewReservation;
use crate::error::{ErrorResponse, HotelError};

/// `GET /reservations` — List reservations with client names.
///
/// # Errors
///
/// Returns [`HotelError::Store`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/reservations",
    tag = "Reservations",
    summary = "List reservations",
    description = "Returns reservations joined with their client's name, sorted by start date. Reservations whose client cannot be found are omitted.",
    responses(
        (status = 200, description = "Reservation list", body = ReservationListResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, HotelError> {
    let data = state.reservations.list_reservations().await?;
    Ok(Json(ReservationListResponse {
        total: data.len(),
        data,
    }))
}

/// `POST /reservations` — Record a reservation.
///
/// # Errors
///
/// Returns [`HotelError::Validation`] if the body is not a well-formed
/// request, a date is malformed, or the start is not strictly before the
/// end.
#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    tag = "Reservations",
    summary = "Record a reservation",
    description = "Books a room for a client. The start date must be strictly before the end date. Neither client existence nor overlap with other bookings is checked.",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = CreateReservationResponse),
        (status = 400, description = "Malformed body or invalid dates", body = ErrorResponse),
    )
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateReservationRequest>,
) -> Result<impl IntoResponse, HotelError> {
    let stay = parse_stay(
        ("date_debut", req.date_debut.as_str()),
        ("date_fin", req.date_fin.as_str()),
    )?;
    let reservation = NewReservation {
        stay,
        client_id: req.client_id,
        room_id: req.room_id,
    };

    let reservation_id = state.reservations.create_reservation(&reservation).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateReservationResponse { reservation_id }),
    ))
}

/// `GET /reservations/orphaned` — Reservations whose client is missing.
///
/// # Errors
///
/// Returns [`HotelError::Store`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/reservations/orphaned",
    tag = "Reservations",
    summary = "List orphaned reservations",
    description = "Returns the reservations left out of the main listing because their client id does not resolve.",
    responses(
        (status = 200, description = "Orphaned reservations", body = OrphanedReservationsResponse),
    )
)]
pub async fn list_orphaned(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, HotelError> {
    let data = state.reservations.list_orphaned().await?;
    Ok(Json(OrphanedReservationsResponse {
        total: data.len(),
        data,
    }))
}

/// Reservation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reservations",
            get(list_reservations).post(create_reservation),
        )
        .route("/reservations/orphaned", get(list_orphaned))
}

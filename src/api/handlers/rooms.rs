//! Room handlers: full listing, availability search, room types.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    AvailabilityQuery, AvailabilityResponse, RoomListResponse, RoomTypeListResponse, parse_stay,
};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, HotelError};

/// `GET /rooms/available` — Rooms free over a date range.
///
/// # Errors
///
/// Returns [`HotelError::Validation`] if a date is malformed or the start
/// is not strictly before the end.
#[utoipa::path(
    get,
    path = "/api/v1/rooms/available",
    tag = "Rooms",
    summary = "Search available rooms",
    description = "Returns every room with no reservation overlapping the range. A reservation ending on the start date or starting on the end date counts as overlapping.",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Available rooms", body = AvailabilityResponse),
        (status = 400, description = "Invalid dates", body = ErrorResponse),
    )
)]
pub async fn find_available_rooms(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, HotelError> {
    let stay = parse_stay(("start", query.start.as_str()), ("end", query.end.as_str()))?;
    let data = state.availability.find_available_rooms(&stay).await?;

    Ok(Json(AvailabilityResponse {
        start: stay.start(),
        end: stay.end(),
        total: data.len(),
        data,
    }))
}

/// `GET /rooms` — Every room with its type.
///
/// # Errors
///
/// Returns [`HotelError::Store`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    tag = "Rooms",
    summary = "List rooms",
    description = "Returns every room with its type label, ordered by room number.",
    responses(
        (status = 200, description = "Room list", body = RoomListResponse),
    )
)]
pub async fn list_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, HotelError> {
    let data = state.availability.list_rooms().await?;
    Ok(Json(RoomListResponse {
        total: data.len(),
        data,
    }))
}

/// `GET /room-types` — Every room type.
///
/// # Errors
///
/// Returns [`HotelError::Store`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/room-types",
    tag = "Rooms",
    summary = "List room types",
    responses(
        (status = 200, description = "Room type list", body = RoomTypeListResponse),
    )
)]
pub async fn list_room_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, HotelError> {
    let data = state.availability.list_room_types().await?;
    Ok(Json(RoomTypeListResponse { data }))
}

/// Room routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(list_rooms))
        .route("/rooms/available", get(find_available_rooms))
        .route("/room-types", get(list_room_types))
}

//! Reservation DTOs for create and list operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ClientId, Reservation, ReservationId, ReservationListing, RoomId};

/// Request body for `POST /reservations`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReservationRequest {
    /// First day of the stay (`YYYY-MM-DD`).
    pub date_debut: String,
    /// End bound of the stay (`YYYY-MM-DD`), strictly after `date_debut`.
    pub date_fin: String,
    /// Client holding the reservation.
    pub client_id: ClientId,
    /// Room to occupy.
    pub room_id: RoomId,
}

/// Response body for `POST /reservations` (201 Created).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateReservationResponse {
    /// Identifier assigned to the new reservation.
    pub reservation_id: ReservationId,
}

/// Response body for `GET /reservations`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservationListResponse {
    /// Reservations with client names, earliest start first.
    pub data: Vec<ReservationListing>,
    /// Number of rows.
    pub total: usize,
}

/// Response body for `GET /reservations/orphaned`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrphanedReservationsResponse {
    /// Reservations whose client does not resolve.
    pub data: Vec<Reservation>,
    /// Number of rows.
    pub total: usize,
}

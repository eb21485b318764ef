//! Reservations binding a client to a room over a stay.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ClientId, ReservationId, RoomId, StayInterval};

/// A stored reservation as persisted, without any join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Reservation {
    /// Reservation identifier.
    pub id: ReservationId,
    /// First day of the stay.
    pub date_debut: NaiveDate,
    /// End bound of the stay.
    pub date_fin: NaiveDate,
    /// Client holding the reservation. Not guaranteed to resolve.
    pub client_id: ClientId,
    /// Room occupied by the reservation.
    pub room_id: RoomId,
}

/// A reservation about to be recorded.
///
/// The stay is already validated, so `date_debut < date_fin` holds for
/// anything built from this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewReservation {
    /// Reserved dates.
    pub stay: StayInterval,
    /// Client holding the reservation.
    pub client_id: ClientId,
    /// Room to occupy.
    pub room_id: RoomId,
}

/// A reservation row joined with the name of its client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ReservationListing {
    /// Reservation identifier.
    pub id: ReservationId,
    /// Client full name.
    pub client: String,
    /// First day of the stay.
    pub date_debut: NaiveDate,
    /// End bound of the stay.
    pub date_fin: NaiveDate,
}

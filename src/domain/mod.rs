//! Domain layer: identifiers, records and the stay interval type.
//!
//! These are plain values. They are produced by the persistence layer,
//! validated here, and passed between the services and the HTTP shell.

pub mod client;
pub mod ids;
pub mod reservation;
pub mod room;
pub mod stay;

pub use client::{Client, ClientOption, NewClient};
pub use ids::{ClientId, ReservationId, RoomId, RoomTypeId};
pub use reservation::{NewReservation, Reservation, ReservationListing};
pub use room::{AvailableRoom, RoomType};
pub use stay::StayInterval;

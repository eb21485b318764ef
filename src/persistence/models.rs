//! Input records for reference data provisioning.

use serde::Deserialize;

use crate::domain::RoomTypeId;

/// A physical room about to be provisioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NewRoom {
    /// Room number as shown on the door.
    pub numero: i64,
    /// Floor.
    pub etage: i64,
    /// Type of the room. Every room has exactly one.
    pub type_id: RoomTypeId,
}

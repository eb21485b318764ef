//! Rooms and room types. Reference data, read-only for the engine.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{RoomId, RoomTypeId};

/// A room category label such as `"suite"` or `"double"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct RoomType {
    /// Type identifier.
    pub id: RoomTypeId,
    /// Type label.
    pub nom: String,
}

/// A physical room joined with the label of its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AvailableRoom {
    /// Room identifier.
    pub id: RoomId,
    /// Room number as shown on the door.
    pub numero: i64,
    /// Floor.
    pub etage: i64,
    /// Label of the room's type.
    pub room_type: String,
}

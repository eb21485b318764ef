//! Room DTOs for listing and availability search.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{AvailableRoom, RoomType};

/// Query parameters for `GET /rooms/available`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailabilityQuery {
    /// First day of the searched stay (`YYYY-MM-DD`).
    #[serde(default)]
    pub start: String,
    /// End bound of the searched stay (`YYYY-MM-DD`).
    #[serde(default)]
    pub end: String,
}

/// Response body for `GET /rooms/available`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityResponse {
    /// Searched start date.
    pub start: NaiveDate,
    /// Searched end date.
    pub end: NaiveDate,
    /// Number of rooms found.
    pub total: usize,
    /// Free rooms ordered by number.
    pub data: Vec<AvailableRoom>,
}

/// Response body for `GET /rooms`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoomListResponse {
    /// Every room with its type label.
    pub data: Vec<AvailableRoom>,
    /// Number of rooms.
    pub total: usize,
}

/// Response body for `GET /room-types`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomTypeListResponse {
    /// Every room type.
    pub data: Vec<RoomType>,
}

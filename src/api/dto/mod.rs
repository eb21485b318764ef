//! Data Transfer Objects for REST request/response serialization.
//!
//! Dates travel as ISO-8601 `YYYY-MM-DD` strings. Request dates are kept
//! as raw strings so that malformed input surfaces as a validation error
//! rather than a body rejection.

pub mod client_dto;
pub mod common_dto;
pub mod reservation_dto;
pub mod room_dto;

pub use client_dto::*;
pub use common_dto::*;
pub use reservation_dto::*;
pub use room_dto::*;

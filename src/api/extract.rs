//! Request extractors that report failures as [`HotelError`].

use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;

use crate::error::HotelError;

/// JSON request body.
///
/// Same as [`axum::Json`], except a malformed body, a missing field or a
/// wrongly typed value is rejected with [`HotelError::Validation`], so the
/// client receives the usual error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HotelError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for HotelError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

//! Hotel clients.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ClientId;
use crate::error::HotelError;

/// A registered client. Never mutated or deleted once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Client {
    /// Store-assigned identifier.
    pub id: ClientId,
    /// Full name.
    pub nom: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub telephone: String,
    /// Street address.
    pub adresse: String,
    /// City.
    pub ville: String,
    /// Postal code, never negative.
    pub code_postal: i64,
}

/// Field values for a client about to be registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    /// Full name.
    pub nom: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub telephone: String,
    /// Street address.
    pub adresse: String,
    /// City.
    pub ville: String,
    /// Postal code.
    pub code_postal: i64,
}

impl NewClient {
    /// Checks that every text field is filled in and the postal code is
    /// not negative.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<(), HotelError> {
        let text_fields = [
            ("nom", &self.nom),
            ("email", &self.email),
            ("telephone", &self.telephone),
            ("adresse", &self.adresse),
            ("ville", &self.ville),
        ];
        if let Some((field, _)) = text_fields
            .iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(HotelError::Validation(format!("{field} must not be empty")));
        }
        if self.code_postal < 0 {
            return Err(HotelError::Validation(format!(
                "code_postal must not be negative, got {}",
                self.code_postal
            )));
        }
        Ok(())
    }
}

/// Minimal id/name pair used to pick the client of a new reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct ClientOption {
    /// Client identifier.
    pub id: ClientId,
    /// Client full name.
    pub nom: String,
}

//! Client DTOs for create and list operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Client, ClientId, ClientOption, NewClient};

/// Request body for `POST /clients`.
///
/// Missing text fields default to empty and are rejected by validation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateClientRequest {
    /// Full name.
    #[serde(default)]
    pub nom: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub telephone: String,
    /// Street address.
    #[serde(default)]
    pub adresse: String,
    /// City.
    #[serde(default)]
    pub ville: String,
    /// Postal code, must not be negative.
    #[serde(default)]
    pub code_postal: i64,
}

impl From<CreateClientRequest> for NewClient {
    fn from(req: CreateClientRequest) -> Self {
        Self {
            nom: req.nom,
            email: req.email,
            telephone: req.telephone,
            adresse: req.adresse,
            ville: req.ville,
            code_postal: req.code_postal,
        }
    }
}

/// Response body for `POST /clients` (201 Created).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateClientResponse {
    /// Identifier assigned to the new client.
    pub client_id: ClientId,
    /// Name echoed from the request.
    pub nom: String,
}

/// Response body for `GET /clients`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientListResponse {
    /// Every registered client.
    pub data: Vec<Client>,
    /// Number of clients.
    pub total: usize,
}

/// Response body for `GET /clients/options`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClientOptionsResponse {
    /// Id/name pairs ordered by name.
    pub data: Vec<ClientOption>,
}

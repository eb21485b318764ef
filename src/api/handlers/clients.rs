//! Client handlers: list, create, and the picker listing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    ClientListResponse, ClientOptionsResponse, CreateClientRequest, CreateClientResponse,
};
use crate::api::extract::JsonBody;
use crate::app_state::AppState;
use crate::domain::NewClient;
use crate::error::{ErrorResponse, HotelError};

/// `GET /clients` — List every registered client.
///
/// # Errors
///
/// Returns [`HotelError::Store`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/clients",
    tag = "Clients",
    summary = "List clients",
    description = "Returns every registered client as a full snapshot, ordered by id.",
    responses(
        (status = 200, description = "Client list", body = ClientListResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, HotelError> {
    let data = state.clients.list_clients().await?;
    Ok(Json(ClientListResponse {
        total: data.len(),
        data,
    }))
}

/// `POST /clients` — Register a client.
///
/// # Errors
///
/// Returns [`HotelError::Validation`] if the body is malformed, a field is
/// blank or the postal code is negative.
#[utoipa::path(
    post,
    path = "/api/v1/clients",
    tag = "Clients",
    summary = "Register a client",
    description = "Validates the client fields and records a new client. Every text field is required and the postal code must not be negative.",
    request_body = CreateClientRequest,
    responses(
        (status = 201, description = "Client created", body = CreateClientResponse),
        (status = 400, description = "Invalid client fields", body = ErrorResponse),
    )
)]
pub async fn create_client(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateClientRequest>,
) -> Result<impl IntoResponse, HotelError> {
    let client = NewClient::from(req);
    let client_id = state.clients.create_client(&client).await?;

    let response = CreateClientResponse {
        client_id,
        nom: client.nom,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /clients/options` — Id and name of every client.
///
/// # Errors
///
/// Returns [`HotelError::Store`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/clients/options",
    tag = "Clients",
    summary = "Client picker",
    description = "Returns id/name pairs ordered by name, for choosing the holder of a new reservation.",
    responses(
        (status = 200, description = "Client options", body = ClientOptionsResponse),
    )
)]
pub async fn client_options(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, HotelError> {
    let data = state.clients.client_options().await?;
    Ok(Json(ClientOptionsResponse { data }))
}

/// Client routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(list_clients).post(create_client))
        .route("/clients/options", get(client_options))
}

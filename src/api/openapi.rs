//! OpenAPI document for the REST API.

use utoipa::OpenApi;

use super::handlers::{clients, reservations, rooms, system};
use crate::error::{ErrorBody, ErrorResponse};

/// OpenAPI description of every endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "hotel-desk",
        description = "Client registry, reservation ledger and room availability for a single hotel."
    ),
    paths(
        clients::list_clients,
        clients::create_client,
        clients::client_options,
        reservations::list_reservations,
        reservations::create_reservation,
        reservations::list_orphaned,
        rooms::find_available_rooms,
        rooms::list_rooms,
        rooms::list_room_types,
        system::health_handler,
    ),
    components(schemas(ErrorResponse, ErrorBody)),
    tags(
        (name = "Clients", description = "Client registration"),
        (name = "Reservations", description = "Reservation ledger"),
        (name = "Rooms", description = "Rooms and availability search"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/api/v1/clients",
            "/api/v1/clients/options",
            "/api/v1/reservations",
            "/api/v1/reservations/orphaned",
            "/api/v1/rooms",
            "/api/v1/rooms/available",
            "/api/v1/room-types",
            "/health",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}

//! Shared application state injected into all Axum handlers.

use crate::persistence::SqliteStore;
use crate::service::{AvailabilityEngine, ClientRegistry, ReservationLedger};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// Every service is built over the same store handle; cloning the state
/// clones handles, not data.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Store handle, used directly only for health checks.
    pub store: SqliteStore,
    /// Client registration and listing.
    pub clients: ClientRegistry,
    /// Reservation recording and listing.
    pub reservations: ReservationLedger,
    /// Room availability queries.
    pub availability: AvailabilityEngine,
}

impl AppState {
    /// Builds every service over `store`.
    #[must_use]
    pub fn new(store: SqliteStore) -> Self {
        Self {
            clients: ClientRegistry::new(store.clone()),
            reservations: ReservationLedger::new(store.clone()),
            availability: AvailabilityEngine::new(store.clone()),
            store,
        }
    }
}

//! Service layer: the operations the presentation shell calls.
//!
//! Each service holds a clone of the injected [`crate::persistence::SqliteStore`]
//! handle. Services validate their inputs before touching the store and
//! re-query it on every call; nothing is cached in process.

pub mod availability;
pub mod client_registry;
pub mod reservation_ledger;

pub use availability::AvailabilityEngine;
pub use client_registry::ClientRegistry;
pub use reservation_ledger::ReservationLedger;

//! # hotel-desk
//!
//! Client registry, reservation ledger and room availability engine for a
//! single hotel, with a thin JSON-over-HTTP front end.
//!
//! The core is the availability engine: given a date range, it reports
//! which physical rooms have no overlapping reservation. Everything else
//! records and lists clients and reservations.
//!
//! ## Architecture
//!
//! ```text
//! Operators (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── ClientRegistry / ReservationLedger / AvailabilityEngine (service/)
//!     │
//!     └── SqliteStore (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;

//! Persistence layer: SQLite storage for clients, rooms and reservations.
//!
//! [`SqliteStore`] wraps a `sqlx::SqlitePool`. It is built once from
//! configuration and handed to every service by value; each call borrows a
//! pooled connection for a single statement and returns it on every exit
//! path. The schema lives in `migrations/` and is applied at startup.

pub mod models;
pub mod sqlite;

pub use models::NewRoom;
pub use sqlite::SqliteStore;

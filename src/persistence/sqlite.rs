//! SQLite implementation of the persistence layer.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::models::NewRoom;
use crate::config::DatabaseConfig;
use crate::domain::{
    AvailableRoom, Client, ClientId, ClientOption, NewClient, NewReservation, Reservation,
    ReservationId, ReservationListing, RoomId, RoomType, RoomTypeId, StayInterval,
};
use crate::error::HotelError;

/// SQLite-backed store using `sqlx::SqlitePool`.
///
/// Cloning is cheap and shares the underlying pool. The store performs no
/// validation of its own: callers check field contents and date ranges
/// before writing.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool according to `config`.
    ///
    /// The database file is created if missing. In-memory databases keep
    /// their connections alive for the lifetime of the pool, since closing
    /// the last one discards the data.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] if the URL is malformed or the
    /// database cannot be opened.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, HotelError> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(config.foreign_keys);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout());
        if config.url.contains(":memory:") {
            pool_options = pool_options
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }

        let pool = pool_options.connect_with(options).await?;
        tracing::debug!(url = %config.url, foreign_keys = config.foreign_keys, "store connected");
        Ok(Self::new(pool))
    }

    /// Applies pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), HotelError> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }

    /// Runs a trivial statement to check the database answers.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] if no connection can be used.
    pub async fn ping(&self) -> Result<(), HotelError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    // ── Clients ────────────────────────────────────────────────────────

    /// Appends a client record and returns its new identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn insert_client(&self, client: &NewClient) -> Result<ClientId, HotelError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO Client (nom, email, telephone, adresse, ville, code_postal) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&client.nom)
        .bind(&client.email)
        .bind(&client.telephone)
        .bind(&client.adresse)
        .bind(&client.ville)
        .bind(client.code_postal)
        .fetch_one(&self.pool)
        .await?;

        Ok(ClientId::new(id))
    }

    /// Loads every client, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn list_clients(&self) -> Result<Vec<Client>, HotelError> {
        let rows = sqlx::query_as::<_, Client>(
            "SELECT id, nom, email, telephone, adresse, ville, code_postal \
             FROM Client ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Loads the id and name of every client, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn list_client_options(&self) -> Result<Vec<ClientOption>, HotelError> {
        let rows =
            sqlx::query_as::<_, ClientOption>("SELECT id, nom FROM Client ORDER BY nom, id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows)
    }

    // ── Reservations ───────────────────────────────────────────────────

    /// Appends a reservation record and returns its new identifier.
    ///
    /// Neither the client nor the room is looked up, and existing bookings
    /// of the room are not consulted.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure, including
    /// foreign key violations when enforcement is enabled.
    pub async fn insert_reservation(
        &self,
        reservation: &NewReservation,
    ) -> Result<ReservationId, HotelError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO Reservation (date_debut, date_fin, client_id, room_id) \
             VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(reservation.stay.start())
        .bind(reservation.stay.end())
        .bind(reservation.client_id)
        .bind(reservation.room_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(ReservationId::new(id))
    }

    /// Loads reservations joined with their client's name, earliest start
    /// first.
    ///
    /// Inner join: a reservation whose client does not resolve is left out.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn list_reservations(&self) -> Result<Vec<ReservationListing>, HotelError> {
        let rows = sqlx::query_as::<_, ReservationListing>(
            "SELECT r.id AS id, c.nom AS client, r.date_debut AS date_debut, r.date_fin AS date_fin \
             FROM Reservation r \
             JOIN Client c ON r.client_id = c.id \
             ORDER BY r.date_debut, r.id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Loads the reservations whose client does not resolve.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn list_orphaned_reservations(&self) -> Result<Vec<Reservation>, HotelError> {
        let rows = sqlx::query_as::<_, Reservation>(
            "SELECT r.id AS id, r.date_debut AS date_debut, r.date_fin AS date_fin, \
                    r.client_id AS client_id, r.room_id AS room_id \
             FROM Reservation r \
             LEFT JOIN Client c ON r.client_id = c.id \
             WHERE c.id IS NULL \
             ORDER BY r.date_debut, r.id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // ── Rooms ──────────────────────────────────────────────────────────

    /// Loads every room with its type label, ordered by room number.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn list_rooms(&self) -> Result<Vec<AvailableRoom>, HotelError> {
        let rows = sqlx::query_as::<_, AvailableRoom>(
            "SELECT ch.id AS id, ch.numero AS numero, ch.etage AS etage, t.nom AS room_type \
             FROM Chambre ch \
             JOIN TypeChambre t ON ch.type_id = t.id \
             ORDER BY ch.numero, ch.id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Loads the rooms that no reservation blocks over `stay`, ordered by
    /// room number.
    ///
    /// A reservation blocks its room unless it ends strictly before the
    /// stay starts or starts strictly after the stay ends. Stored dates are
    /// compared as they are, without re-validation.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn list_available_rooms(
        &self,
        stay: &StayInterval,
    ) -> Result<Vec<AvailableRoom>, HotelError> {
        let rows = sqlx::query_as::<_, AvailableRoom>(
            "SELECT ch.id AS id, ch.numero AS numero, ch.etage AS etage, t.nom AS room_type \
             FROM Chambre ch \
             JOIN TypeChambre t ON ch.type_id = t.id \
             WHERE NOT EXISTS ( \
                 SELECT 1 FROM Reservation r \
                 WHERE r.room_id = ch.id \
                   AND NOT (r.date_fin < ? OR r.date_debut > ?) \
             ) \
             ORDER BY ch.numero, ch.id",
        )
        .bind(stay.start())
        .bind(stay.end())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Loads every room type, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn list_room_types(&self) -> Result<Vec<RoomType>, HotelError> {
        let rows = sqlx::query_as::<_, RoomType>("SELECT id, nom FROM TypeChambre ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Provisions a room type.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn insert_room_type(&self, nom: &str) -> Result<RoomTypeId, HotelError> {
        let id =
            sqlx::query_scalar::<_, i64>("INSERT INTO TypeChambre (nom) VALUES (?) RETURNING id")
                .bind(nom)
                .fetch_one(&self.pool)
                .await?;

        Ok(RoomTypeId::new(id))
    }

    /// Provisions a physical room.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn insert_room(&self, room: &NewRoom) -> Result<RoomId, HotelError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO Chambre (numero, etage, type_id) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(room.numero)
        .bind(room.etage)
        .bind(room.type_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(RoomId::new(id))
    }
}

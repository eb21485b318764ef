//! Client registry: registers and lists hotel clients.

use crate::domain::{Client, ClientId, ClientOption, NewClient};
use crate::error::HotelError;
use crate::persistence::SqliteStore;

/// Creates and lists clients.
#[derive(Debug, Clone)]
pub struct ClientRegistry {
    store: SqliteStore,
}

impl ClientRegistry {
    /// Creates a registry over the given store handle.
    #[must_use]
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Returns every registered client.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn list_clients(&self) -> Result<Vec<Client>, HotelError> {
        let clients = self.store.list_clients().await?;
        tracing::debug!(count = clients.len(), "clients listed");
        Ok(clients)
    }

    /// Registers a client and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Validation`] if a text field is blank or the
    /// postal code is negative; nothing is written in that case. Returns a
    /// [`HotelError::Store`] on database failure.
    pub async fn create_client(&self, client: &NewClient) -> Result<ClientId, HotelError> {
        client.validate()?;
        let client_id = self.store.insert_client(client).await?;
        tracing::info!(%client_id, nom = %client.nom, "client created");
        Ok(client_id)
    }

    /// Returns the id and name of every client, for picking the holder of
    /// a reservation.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn client_options(&self) -> Result<Vec<ClientOption>, HotelError> {
        self.store.list_client_options().await
    }
}

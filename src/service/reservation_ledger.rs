//! Reservation ledger: records reservations and lists them by start date.

use crate::domain::{NewReservation, Reservation, ReservationId, ReservationListing};
use crate::error::HotelError;
use crate::persistence::SqliteStore;

/// Creates and lists reservations.
///
/// The ledger records what it is given. It does not check that the client
/// exists, and it does not stop two reservations of the same room from
/// overlapping.
#[derive(Debug, Clone)]
pub struct ReservationLedger {
    store: SqliteStore,
}

impl ReservationLedger {
    /// Creates a ledger over the given store handle.
    #[must_use]
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Returns reservations with their client's name, earliest start first.
    ///
    /// Reservations whose client cannot be found are omitted; see
    /// [`ReservationLedger::list_orphaned`].
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn list_reservations(&self) -> Result<Vec<ReservationListing>, HotelError> {
        let rows = self.store.list_reservations().await?;
        tracing::debug!(count = rows.len(), "reservations listed");
        Ok(rows)
    }

    /// Records a reservation and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn create_reservation(
        &self,
        reservation: &NewReservation,
    ) -> Result<ReservationId, HotelError> {
        let reservation_id = self.store.insert_reservation(reservation).await?;
        tracing::info!(
            %reservation_id,
            client_id = %reservation.client_id,
            room_id = %reservation.room_id,
            stay = %reservation.stay,
            "reservation created"
        );
        Ok(reservation_id)
    }

    /// Returns the reservations left out of
    /// [`ReservationLedger::list_reservations`] because their client does
    /// not resolve.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn list_orphaned(&self) -> Result<Vec<Reservation>, HotelError> {
        let orphans = self.store.list_orphaned_reservations().await?;
        if !orphans.is_empty() {
            tracing::warn!(count = orphans.len(), "reservations reference missing clients");
        }
        Ok(orphans)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{ClientId, RoomId, StayInterval};
    use crate::persistence::sqlite::test_support::{client, memory_store, room, stay};

    struct Fixture {
        ledger: ReservationLedger,
        ana: ClientId,
        room: RoomId,
    }

    async fn fixture() -> Fixture {
        let store = memory_store().await;
        let room = room(&store, 101, "double").await;
        let Ok(ana) = store.insert_client(&client("Ana")).await else {
            panic!("client insert failed");
        };
        Fixture {
            ledger: ReservationLedger::new(store),
            ana,
            room,
        }
    }

    fn booking(fx: &Fixture, stay: StayInterval) -> NewReservation {
        NewReservation {
            stay,
            client_id: fx.ana,
            room_id: fx.room,
        }
    }

    #[tokio::test]
    async fn created_reservation_is_listed_with_client_name() {
        let fx = fixture().await;
        let requested = stay("2024-01-10", "2024-01-20");

        let Ok(id) = fx.ledger.create_reservation(&booking(&fx, requested)).await else {
            panic!("create failed");
        };
        let Ok(rows) = fx.ledger.list_reservations().await else {
            panic!("list failed");
        };

        assert_eq!(
            rows,
            [ReservationListing {
                id,
                client: "Ana".to_string(),
                date_debut: requested.start(),
                date_fin: requested.end(),
            }]
        );
    }

    #[tokio::test]
    async fn listing_is_sorted_by_start_date() {
        let fx = fixture().await;
        for (from, to) in [
            ("2024-03-01", "2024-03-05"),
            ("2024-01-01", "2024-01-05"),
            ("2024-02-01", "2024-02-05"),
        ] {
            let _ = fx.ledger.create_reservation(&booking(&fx, stay(from, to))).await;
        }

        let Ok(rows) = fx.ledger.list_reservations().await else {
            panic!("list failed");
        };
        let starts: Vec<String> = rows.iter().map(|r| r.date_debut.to_string()).collect();
        assert_eq!(starts, ["2024-01-01", "2024-02-01", "2024-03-01"]);
        assert!(rows.windows(2).all(|w| match w {
            [a, b] => a.date_debut <= b.date_debut,
            _ => true,
        }));
    }

    #[tokio::test]
    async fn double_booking_is_accepted() {
        let fx = fixture().await;
        let same = booking(&fx, stay("2024-01-10", "2024-01-20"));
        assert!(fx.ledger.create_reservation(&same).await.is_ok());
        assert!(fx.ledger.create_reservation(&same).await.is_ok());

        let rows = fx.ledger.list_reservations().await.ok().unwrap_or_default();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn unknown_client_is_accepted_but_hidden_from_listing() {
        let fx = fixture().await;
        let ghost = NewReservation {
            client_id: ClientId::new(404),
            ..booking(&fx, stay("2024-05-01", "2024-05-03"))
        };
        let Ok(id) = fx.ledger.create_reservation(&ghost).await else {
            panic!("create should not check the client");
        };

        let listed = fx.ledger.list_reservations().await.ok().unwrap_or_default();
        assert!(listed.is_empty());

        let orphans = fx.ledger.list_orphaned().await.ok().unwrap_or_default();
        assert_eq!(orphans.iter().map(|r| r.id).collect::<Vec<_>>(), [id]);
    }

    #[tokio::test]
    async fn inverted_dates_never_reach_the_ledger() {
        let fx = fixture().await;
        let (Ok(start), Ok(end)) = (
            "2024-01-20".parse::<NaiveDate>(),
            "2024-01-10".parse::<NaiveDate>(),
        ) else {
            panic!("invalid test date");
        };
        let request = StayInterval::new(start, end).map(|stay| booking(&fx, stay));
        assert!(matches!(request, Err(HotelError::Validation(_))));

        let rows = fx.ledger.list_reservations().await.ok().unwrap_or_default();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn listing_twice_is_stable() {
        let fx = fixture().await;
        let _ = fx
            .ledger
            .create_reservation(&booking(&fx, stay("2024-01-10", "2024-01-20")))
            .await;

        let first = fx.ledger.list_reservations().await.ok();
        let second = fx.ledger.list_reservations().await.ok();
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}

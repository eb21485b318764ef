//! Availability engine: which rooms are free over a stay.
//!
//! A room is available for a stay when none of the reservations bound to it
//! overlaps the stay. Two ranges overlap unless one ends strictly before the
//! other starts, so a booking that ends on the first day of the query still
//! blocks the room.
//!
//! Availability is computed per physical room. Two rooms of the same type
//! are independent, and a booking only ever blocks the room named by its
//! `room_id`. The filter runs inside the store, in a single read.

use crate::domain::{AvailableRoom, RoomType, StayInterval};
use crate::error::HotelError;
use crate::persistence::SqliteStore;

/// Answers availability queries against the current store contents.
#[derive(Debug, Clone)]
pub struct AvailabilityEngine {
    store: SqliteStore,
}

impl AvailabilityEngine {
    /// Creates an engine over the given store handle.
    #[must_use]
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Returns the rooms with no reservation overlapping `stay`, ordered by
    /// room number.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn find_available_rooms(
        &self,
        stay: &StayInterval,
    ) -> Result<Vec<AvailableRoom>, HotelError> {
        let available = self.store.list_available_rooms(stay).await?;
        tracing::debug!(%stay, available = available.len(), "availability computed");
        Ok(available)
    }

    /// Returns every room with its type label, ordered by room number.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn list_rooms(&self) -> Result<Vec<AvailableRoom>, HotelError> {
        self.store.list_rooms().await
    }

    /// Returns every room type.
    ///
    /// # Errors
    ///
    /// Returns a [`HotelError::Store`] on database failure.
    pub async fn list_room_types(&self) -> Result<Vec<RoomType>, HotelError> {
        self.store.list_room_types().await
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;
    use crate::domain::{ClientId, NewReservation, RoomId};
    use crate::persistence::sqlite::test_support::{client, memory_store, room, stay};

    struct Hotel {
        engine: AvailabilityEngine,
        store: SqliteStore,
        guest: ClientId,
        rooms: [RoomId; 3],
    }

    /// Rooms 101, 102 and 103, no bookings.
    async fn hotel() -> Hotel {
        let store = memory_store().await;
        let rooms = [
            room(&store, 101, "double").await,
            room(&store, 102, "suite").await,
            room(&store, 103, "double").await,
        ];
        let Ok(guest) = store.insert_client(&client("Ana")).await else {
            panic!("client insert failed");
        };
        Hotel {
            engine: AvailabilityEngine::new(store.clone()),
            store,
            guest,
            rooms,
        }
    }

    impl Hotel {
        async fn book(&self, room_id: RoomId, start: &str, end: &str) {
            let Ok(_) = self
                .store
                .insert_reservation(&NewReservation {
                    stay: stay(start, end),
                    client_id: self.guest,
                    room_id,
                })
                .await
            else {
                panic!("reservation insert failed");
            };
        }

        async fn free(&self, start: &str, end: &str) -> Vec<RoomId> {
            let Ok(rooms) = self.engine.find_available_rooms(&stay(start, end)).await else {
                panic!("availability query failed");
            };
            rooms.iter().map(|room| room.id).collect()
        }
    }

    #[tokio::test]
    async fn unbooked_rooms_are_always_available() {
        let hotel = hotel().await;
        for (start, end) in [
            ("2024-01-01", "2024-01-02"),
            ("1999-12-31", "2031-01-01"),
            ("2024-02-28", "2024-03-01"),
        ] {
            assert_eq!(hotel.free(start, end).await, hotel.rooms);
        }
    }

    #[tokio::test]
    async fn booking_ending_on_query_start_blocks_room() {
        let hotel = hotel().await;
        let [first, second, third] = hotel.rooms;
        hotel.book(first, "2024-01-10", "2024-01-20").await;

        assert_eq!(hotel.free("2024-01-20", "2024-01-25").await, [second, third]);
        assert_eq!(
            hotel.free("2024-01-21", "2024-01-25").await,
            [first, second, third]
        );
    }

    #[tokio::test]
    async fn booking_starting_on_query_end_blocks_room() {
        let hotel = hotel().await;
        let [first, second, third] = hotel.rooms;
        hotel.book(first, "2024-01-25", "2024-01-30").await;

        assert_eq!(hotel.free("2024-01-20", "2024-01-25").await, [second, third]);
        assert_eq!(
            hotel.free("2024-01-20", "2024-01-24").await,
            [first, second, third]
        );
    }

    #[tokio::test]
    async fn gap_between_two_bookings_is_available() {
        let hotel = hotel().await;
        let [first, second, third] = hotel.rooms;
        hotel.book(first, "2024-01-01", "2024-01-05").await;
        hotel.book(first, "2024-01-10", "2024-01-15").await;

        assert_eq!(
            hotel.free("2024-01-06", "2024-01-09").await,
            [first, second, third]
        );
        assert_eq!(hotel.free("2024-01-03", "2024-01-12").await, [second, third]);
    }

    #[tokio::test]
    async fn bookings_only_block_their_own_room() {
        let hotel = hotel().await;
        let [first, second, third] = hotel.rooms;
        hotel.book(second, "2024-01-10", "2024-01-20").await;

        assert_eq!(hotel.free("2024-01-12", "2024-01-14").await, [first, third]);
    }

    #[tokio::test]
    async fn orphaned_bookings_still_block_their_room() {
        let hotel = hotel().await;
        let [first, second, third] = hotel.rooms;
        let _ = hotel
            .store
            .insert_reservation(&NewReservation {
                stay: stay("2024-01-10", "2024-01-20"),
                client_id: ClientId::new(777),
                room_id: first,
            })
            .await;

        assert_eq!(hotel.free("2024-01-12", "2024-01-14").await, [second, third]);
    }

    #[tokio::test]
    async fn result_carries_type_label_and_sorts_by_number() {
        let store = memory_store().await;
        let high = room(&store, 305, "suite").await;
        let low = room(&store, 101, "simple").await;
        let engine = AvailabilityEngine::new(store);

        let Ok(rooms) = engine
            .find_available_rooms(&stay("2024-01-12", "2024-01-14"))
            .await
        else {
            panic!("availability query failed");
        };
        assert_eq!(
            rooms,
            [
                AvailableRoom {
                    id: low,
                    numero: 101,
                    etage: 1,
                    room_type: "simple".to_string(),
                },
                AvailableRoom {
                    id: high,
                    numero: 305,
                    etage: 3,
                    room_type: "suite".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn query_agrees_with_inclusive_bounds_rule() {
        // booked [01-10, 01-20) on the first room; slide a 3-day query
        // across it and compare with the overlap rule evaluated in Rust
        let hotel = hotel().await;
        let [first, ..] = hotel.rooms;
        hotel.book(first, "2024-01-10", "2024-01-20").await;

        let (Ok(booked_start), Ok(booked_end), Ok(mut start)) = (
            "2024-01-10".parse::<NaiveDate>(),
            "2024-01-20".parse::<NaiveDate>(),
            "2024-01-01".parse::<NaiveDate>(),
        ) else {
            panic!("invalid test date");
        };
        let Ok(last) = "2024-01-25".parse::<NaiveDate>() else {
            panic!("invalid test date");
        };

        while start <= last {
            let end = start + Duration::days(3);
            let Ok(query) = StayInterval::new(start, end) else {
                panic!("invalid test interval");
            };
            let expected_blocked = !(booked_end < start || booked_start > end);

            let Ok(rooms) = hotel.engine.find_available_rooms(&query).await else {
                panic!("availability query failed");
            };
            let blocked = !rooms.iter().any(|room| room.id == first);
            assert_eq!(blocked, expected_blocked, "query {query}");

            start += Duration::days(1);
        }
    }

    #[tokio::test]
    async fn empty_hotel_has_no_rooms() {
        let engine = AvailabilityEngine::new(memory_store().await);
        let result = engine
            .find_available_rooms(&stay("2024-01-12", "2024-01-14"))
            .await;
        assert!(matches!(result.as_deref(), Ok([])));
        assert!(matches!(engine.list_room_types().await.as_deref(), Ok([])));
    }
}

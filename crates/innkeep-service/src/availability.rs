//! Availability resolver: which room types are free for a window.

use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};

use innkeep_core::AppError;
use innkeep_core::result::AppResult;
use innkeep_database::repositories::reservation::ReservationRepository;
use innkeep_database::repositories::room::RoomRepository;
use innkeep_database::repositories::room_type::RoomTypeRepository;
use innkeep_entity::reservation::StayWindow;
use innkeep_entity::room_type::RoomType;

/// One room type's availability for a requested window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    /// The room type.
    pub room_type: RoomType,
    /// Total operational rooms of this type.
    pub total_rooms: i64,
    /// Rooms of this type free for the whole window.
    pub available_rooms: i64,
}

/// Resolves free room types for a date window and party size.
#[derive(Debug, Clone)]
pub struct AvailabilityService {
    /// Room type repository.
    room_type_repo: Arc<RoomTypeRepository>,
    /// Room repository.
    room_repo: Arc<RoomRepository>,
    /// Reservation repository.
    reservation_repo: Arc<ReservationRepository>,
}

impl AvailabilityService {
    /// Create a new availability service.
    pub fn new(
        room_type_repo: Arc<RoomTypeRepository>,
        room_repo: Arc<RoomRepository>,
        reservation_repo: Arc<ReservationRepository>,
    ) -> Self {
        Self {
            room_type_repo,
            room_repo,
            reservation_repo,
        }
    }

    /// Find room types with at least one free room for the window.
    ///
    /// Each candidate type is resolved independently, so the per-type
    /// checks run concurrently and any single storage error aborts the
    /// whole call; partial results are never returned. Entries come back
    /// ordered by base price ascending, which callers must treat as a
    /// display convenience, not a contract.
    pub async fn find_available_room_types(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        adults: i32,
        children: i32,
    ) -> AppResult<Vec<AvailabilityEntry>> {
        if adults < 1 {
            return Err(AppError::validation("At least one adult is required"));
        }
        if children < 0 {
            return Err(AppError::validation("Child count must not be negative"));
        }

        let window = StayWindow::new_from(check_in, check_out, crate::today())?;
        let candidates = self
            .room_type_repo
            .find_all(Some(adults + children))
            .await?;

        let entries = try_join_all(
            candidates
                .into_iter()
                .map(|room_type| self.resolve_type(room_type, window)),
        )
        .await?;

        Ok(entries
            .into_iter()
            .filter(|entry| entry.available_rooms > 0)
            .collect())
    }

    /// Count the free rooms of one type for the window.
    ///
    /// A type with no rooms, or all rooms under maintenance, simply yields
    /// zero; that is an empty result, not an error.
    async fn resolve_type(
        &self,
        room_type: RoomType,
        window: StayWindow,
    ) -> AppResult<AvailabilityEntry> {
        let rooms = self.room_repo.operational_by_type(room_type.id).await?;
        if rooms.is_empty() {
            return Ok(AvailabilityEntry {
                room_type,
                total_rooms: 0,
                available_rooms: 0,
            });
        }

        let room_ids: Vec<_> = rooms.iter().map(|room| room.id).collect();
        let booked = self
            .reservation_repo
            .booked_room_ids(&room_ids, &window)
            .await?;

        let available_rooms = rooms
            .iter()
            .filter(|room| !booked.contains(&room.id))
            .count() as i64;

        Ok(AvailabilityEntry {
            room_type,
            total_rooms: rooms.len() as i64,
            available_rooms,
        })
    }
}

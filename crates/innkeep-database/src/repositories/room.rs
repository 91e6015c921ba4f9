//! Physical room repository implementation.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use innkeep_core::error::{AppError, ErrorKind};
use innkeep_core::result::AppResult;
use innkeep_entity::room::Room;

/// Repository for physical room reads.
#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// Create a new room repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a room by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room by id", e))
    }

    /// List all rooms of a type, ordered by room number.
    pub async fn find_by_type(&self, room_type_id: Uuid) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE room_type_id = $1 ORDER BY room_number ASC",
        )
        .bind(room_type_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rooms by type", e))
    }

    /// List operationally available rooms of a type, ordered by room number.
    ///
    /// Maintenance and out-of-order rooms never appear here, regardless of
    /// any date window.
    pub async fn operational_by_type(&self, room_type_id: Uuid) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms \
             WHERE room_type_id = $1 AND status = 'available' \
             ORDER BY room_number ASC",
        )
        .bind(room_type_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list operational rooms", e)
        })
    }

    /// Lock the operational rooms of a type for the rest of the transaction.
    ///
    /// `FOR UPDATE` serializes concurrent booking attempts on the same room
    /// type: the second transaction blocks here until the first commits,
    /// then re-reads the reservation table and sees the new booking.
    pub async fn lock_operational_by_type(
        &self,
        tx: &mut PgConnection,
        room_type_id: Uuid,
    ) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms \
             WHERE room_type_id = $1 AND status = 'available' \
             ORDER BY room_number ASC \
             FOR UPDATE",
        )
        .bind(room_type_id)
        .fetch_all(tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to lock rooms for booking", e)
        })
    }
}

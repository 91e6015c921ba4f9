//! Room type repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use innkeep_core::error::{AppError, ErrorKind};
use innkeep_core::result::AppResult;
use innkeep_entity::room_type::{RoomType, RoomTypeInventory};

/// Repository for room type catalog reads.
#[derive(Debug, Clone)]
pub struct RoomTypeRepository {
    pool: PgPool,
}

impl RoomTypeRepository {
    /// Create a new room type repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a room type by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<RoomType>> {
        sqlx::query_as::<_, RoomType>("SELECT * FROM room_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find room type by id", e)
            })
    }

    /// List room types, optionally filtered by minimum occupancy.
    ///
    /// Ordered by base price ascending. The capacity filter is a
    /// pre-filter only; it says nothing about date availability.
    pub async fn find_all(&self, min_capacity: Option<i32>) -> AppResult<Vec<RoomType>> {
        match min_capacity {
            Some(capacity) => {
                sqlx::query_as::<_, RoomType>(
                    "SELECT * FROM room_types WHERE max_occupancy >= $1 ORDER BY base_price ASC",
                )
                .bind(capacity)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, RoomType>("SELECT * FROM room_types ORDER BY base_price ASC")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list room types", e))
    }

    /// List all room types annotated with their room counts.
    ///
    /// `operational_rooms` counts rooms whose status flag is `available`;
    /// it carries no date semantics.
    pub async fn inventory(&self) -> AppResult<Vec<RoomTypeInventory>> {
        sqlx::query_as::<_, RoomTypeInventory>(
            "SELECT rt.*, \
                    COUNT(r.id) AS total_rooms, \
                    COUNT(r.id) FILTER (WHERE r.status = 'available') AS operational_rooms \
             FROM room_types rt \
             LEFT JOIN rooms r ON r.room_type_id = rt.id \
             GROUP BY rt.id \
             ORDER BY rt.base_price ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load room type inventory", e)
        })
    }
}

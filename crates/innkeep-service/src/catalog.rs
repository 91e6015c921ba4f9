//! Catalog reader: room type and room retrieval.

use std::sync::Arc;

use uuid::Uuid;

use innkeep_core::AppError;
use innkeep_core::result::AppResult;
use innkeep_database::repositories::room::RoomRepository;
use innkeep_database::repositories::room_type::RoomTypeRepository;
use innkeep_entity::room::Room;
use innkeep_entity::room_type::{RoomType, RoomTypeInventory};

/// Read-only access to the room catalog.
///
/// Pure reads with no side effects and no in-process caching: catalog rows
/// are slow-moving staff-edited configuration, and a stale cache here
/// would feed stale data into availability results.
#[derive(Debug, Clone)]
pub struct CatalogService {
    /// Room type repository.
    room_type_repo: Arc<RoomTypeRepository>,
    /// Room repository.
    room_repo: Arc<RoomRepository>,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(room_type_repo: Arc<RoomTypeRepository>, room_repo: Arc<RoomRepository>) -> Self {
        Self {
            room_type_repo,
            room_repo,
        }
    }

    /// List room types, optionally restricted to those that can sleep at
    /// least `min_capacity` occupants.
    ///
    /// The capacity filter is a pre-filter on the catalog; it does not
    /// consult reservations.
    pub async fn list_room_types(&self, min_capacity: Option<i32>) -> AppResult<Vec<RoomType>> {
        self.room_type_repo.find_all(min_capacity).await
    }

    /// Get a single room type, or a not-found error.
    pub async fn get_room_type(&self, id: Uuid) -> AppResult<RoomType> {
        self.room_type_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room type {id} not found")))
    }

    /// List the physical rooms belonging to a room type.
    pub async fn list_rooms_by_type(&self, room_type_id: Uuid) -> AppResult<Vec<Room>> {
        // Resolve the type first so an unknown id is a 404, not [].
        self.get_room_type(room_type_id).await?;
        self.room_repo.find_by_type(room_type_id).await
    }

    /// The full catalog annotated with per-type room counts.
    ///
    /// "Operational" counts rooms by status flag only; there is no date
    /// dimension here.
    pub async fn inventory(&self) -> AppResult<Vec<RoomTypeInventory>> {
        self.room_type_repo.inventory().await
    }
}

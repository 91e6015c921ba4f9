//! Response DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use innkeep_service::availability::AvailabilityEntry;
use innkeep_entity::room_type::RoomTypeInventory;

/// One room type's availability, shaped for the booking widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityEntryDto {
    /// Room type identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: Option<String>,
    /// Nightly base price.
    pub base_price: Decimal,
    /// Maximum occupancy.
    pub max_occupancy: i32,
    /// Amenity labels.
    pub amenities: Vec<String>,
    /// Whether at least one room is free for the window.
    pub available: bool,
    /// Rooms free for the whole window.
    #[serde(rename = "availableRooms")]
    pub available_rooms: i64,
    /// Total operational rooms of this type.
    #[serde(rename = "totalRooms")]
    pub total_rooms: i64,
}

impl From<AvailabilityEntry> for AvailabilityEntryDto {
    fn from(entry: AvailabilityEntry) -> Self {
        Self {
            id: entry.room_type.id,
            name: entry.room_type.name,
            description: entry.room_type.description,
            base_price: entry.room_type.base_price,
            max_occupancy: entry.room_type.max_occupancy,
            amenities: entry.room_type.amenities,
            available: entry.available_rooms > 0,
            available_rooms: entry.available_rooms,
            total_rooms: entry.total_rooms,
        }
    }
}

/// One catalog entry with operational room counts (no date dimension).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTypeInventoryDto {
    /// Room type identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: Option<String>,
    /// Nightly base price.
    pub base_price: Decimal,
    /// Maximum occupancy.
    pub max_occupancy: i32,
    /// Amenity labels.
    pub amenities: Vec<String>,
    /// Rooms currently in operational status `available`.
    #[serde(rename = "availableRooms")]
    pub available_rooms: i64,
    /// Total physical rooms of this type.
    #[serde(rename = "totalRooms")]
    pub total_rooms: i64,
}

impl From<RoomTypeInventory> for RoomTypeInventoryDto {
    fn from(inv: RoomTypeInventory) -> Self {
        Self {
            id: inv.room_type.id,
            name: inv.room_type.name,
            description: inv.room_type.description,
            base_price: inv.room_type.base_price,
            max_occupancy: inv.room_type.max_occupancy,
            amenities: inv.room_type.amenities,
            available_rooms: inv.operational_rooms,
            total_rooms: inv.total_rooms,
        }
    }
}

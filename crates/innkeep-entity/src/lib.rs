//! # innkeep-entity
//!
//! Domain entity models for Innkeep. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod guest;
pub mod invoice;
pub mod reservation;
pub mod room;
pub mod room_type;

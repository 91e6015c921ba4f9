//! Repository implementations, one per aggregate.

pub mod guest;
pub mod invoice;
pub mod reservation;
pub mod room;
pub mod room_type;

//! Reservation domain entities.

pub mod model;
pub mod status;
pub mod window;

pub use model::{CreateReservation, Reservation};
pub use status::ReservationStatus;
pub use window::StayWindow;

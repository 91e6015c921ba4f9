//! # innkeep-service
//!
//! Business logic services for Innkeep. Each service orchestrates the
//! repositories in `innkeep-database` and owns one slice of the booking
//! engine: catalog reads, availability resolution, price calculation,
//! booking creation, and reservation lifecycle transitions.

pub mod availability;
pub mod booking;
pub mod catalog;
pub mod pricing;
pub mod reservation;

use chrono::NaiveDate;

/// The current calendar day in the deployment's local timezone.
///
/// Both availability search and booking creation reject windows starting
/// before this day; the rule is enforced uniformly across entry points.
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

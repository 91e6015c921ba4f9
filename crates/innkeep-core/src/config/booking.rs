//! Booking and pricing configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pricing parameters applied to every booking.
///
/// Rates are decimals, never binary floats: the same inputs must always
/// produce the identical total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Flat tax rate applied to the subtotal, e.g. `0.21` for 21 %.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
    /// Breakfast rate per adult per night. Children are not charged.
    #[serde(default = "default_breakfast_rate")]
    pub breakfast_rate_per_person_per_night: Decimal,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            breakfast_rate_per_person_per_night: default_breakfast_rate(),
        }
    }
}

fn default_tax_rate() -> Decimal {
    Decimal::new(21, 2)
}

fn default_breakfast_rate() -> Decimal {
    Decimal::new(8, 0)
}

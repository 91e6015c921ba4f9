//! Price calculator: itemized stay pricing with decimal arithmetic.

use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use innkeep_core::AppError;
use innkeep_core::config::booking::BookingConfig;
use innkeep_core::result::AppResult;
use innkeep_database::repositories::room_type::RoomTypeRepository;
use innkeep_entity::reservation::StayWindow;

/// An itemized price quote for one stay.
///
/// Carries every line item so a client can render a receipt, not just a
/// single number. All amounts are decimals; identical inputs always
/// produce an identical breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Number of nights.
    pub nights: i64,
    /// Adults in the party.
    pub adults: i32,
    /// Children in the party.
    pub children: i32,
    /// Nightly base rate of the room type.
    pub nightly_rate: Decimal,
    /// Room line: nightly rate × nights.
    pub room_total: Decimal,
    /// Breakfast line: rate × adults × nights, zero when not included.
    pub breakfast_total: Decimal,
    /// Sum of the line items before tax.
    pub subtotal: Decimal,
    /// Tax rate applied to the subtotal.
    pub tax_rate: Decimal,
    /// Tax amount, rounded to 2 decimal places.
    pub tax_amount: Decimal,
    /// Grand total.
    pub total: Decimal,
}

/// Compute the price breakdown for a stay.
///
/// Pure function of its inputs. Children are not charged for breakfast;
/// the per-person rate applies to adults only.
pub fn compute_breakdown(
    nightly_rate: Decimal,
    window: &StayWindow,
    adults: i32,
    children: i32,
    breakfast_included: bool,
    config: &BookingConfig,
) -> PriceBreakdown {
    let nights = window.nights();
    let nights_dec = Decimal::from(nights);

    let room_total = nightly_rate * nights_dec;
    let breakfast_total = if breakfast_included {
        config.breakfast_rate_per_person_per_night * Decimal::from(adults) * nights_dec
    } else {
        Decimal::ZERO
    };

    let subtotal = room_total + breakfast_total;
    let tax_amount =
        (subtotal * config.tax_rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let total = subtotal + tax_amount;

    PriceBreakdown {
        nights,
        adults,
        children,
        nightly_rate,
        room_total,
        breakfast_total,
        subtotal,
        tax_rate: config.tax_rate,
        tax_amount,
        total,
    }
}

/// Resolves a room type's rate and prices a stay against it.
#[derive(Debug, Clone)]
pub struct PricingService {
    /// Room type repository.
    room_type_repo: Arc<RoomTypeRepository>,
    /// Pricing parameters.
    config: BookingConfig,
}

impl PricingService {
    /// Create a new pricing service.
    pub fn new(room_type_repo: Arc<RoomTypeRepository>, config: BookingConfig) -> Self {
        Self {
            room_type_repo,
            config,
        }
    }

    /// Price a stay for the given room type and window.
    pub async fn calculate(
        &self,
        room_type_id: Uuid,
        window: &StayWindow,
        adults: i32,
        children: i32,
        breakfast_included: bool,
    ) -> AppResult<PriceBreakdown> {
        let room_type = self
            .room_type_repo
            .find_by_id(room_type_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room type {room_type_id} not found")))?;

        Ok(compute_breakdown(
            room_type.base_price,
            window,
            adults,
            children,
            breakfast_included,
            &self.config,
        ))
    }
}

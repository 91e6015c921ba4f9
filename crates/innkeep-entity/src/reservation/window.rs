//! Half-open stay window with the central overlap test.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use innkeep_core::{AppError, AppResult};

/// A contiguous stay over `[check_in, check_out)`.
///
/// The check-out date is exclusive: a stay occupies the nights
/// `check_in .. check_out - 1`, so back-to-back stays sharing a date do
/// not conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayWindow {
    /// First occupied night.
    pub check_in: NaiveDate,
    /// Day of departure (not occupied).
    pub check_out: NaiveDate,
}

impl StayWindow {
    /// Build a window, rejecting empty or inverted ranges.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> AppResult<Self> {
        if check_in >= check_out {
            return Err(AppError::invalid_date_range(
                "Check-out date must be after check-in date",
            ));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Build a window that must not start before `today`.
    pub fn new_from(check_in: NaiveDate, check_out: NaiveDate, today: NaiveDate) -> AppResult<Self> {
        let window = Self::new(check_in, check_out)?;
        if check_in < today {
            return Err(AppError::invalid_date_range(
                "Check-in date must not be in the past",
            ));
        }
        Ok(window)
    }

    /// Number of nights in the stay. Always at least 1 for a valid window.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Half-open interval intersection test.
    ///
    /// Two windows conflict iff `a.start < b.end && b.start < a.end`.
    pub fn overlaps(&self, other: &StayWindow) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

//! Invoice billing status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Billing status of an invoice.
///
/// Transitions after creation (sending, payment, overdue marking) belong
/// to the billing subsystem and are independent of the reservation
/// lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "invoice_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Not yet finalized.
    Draft,
    /// Awaiting payment. Initial status for booking-created invoices.
    Pending,
    /// Sent to the guest.
    Sent,
    /// Paid in full.
    Paid,
    /// Past the due date without payment.
    Overdue,
    /// Cancelled together with its reservation.
    Cancelled,
}

impl InvoiceStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

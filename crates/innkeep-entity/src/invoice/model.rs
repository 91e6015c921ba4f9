//! Invoice entity model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::InvoiceStatus;

/// The billing record tied 1:1 to a reservation.
///
/// Created in the same transaction as its reservation; at creation its
/// total equals the reservation's stored total.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    /// Unique invoice identifier.
    pub id: Uuid,
    /// The reservation this invoice bills.
    pub reservation_id: Uuid,
    /// Generated human-readable number, e.g. `INV-2025-000042`.
    pub invoice_number: String,
    /// Date the invoice was issued.
    pub issue_date: NaiveDate,
    /// Payment due date (defaults to the check-in date).
    pub due_date: NaiveDate,
    /// Amount before tax.
    pub subtotal: Decimal,
    /// Tax amount.
    pub tax_amount: Decimal,
    /// Total amount due.
    pub total: Decimal,
    /// Billing status.
    pub status: InvoiceStatus,
    /// When the invoice was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to persist a new invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvoice {
    /// The reservation this invoice bills.
    pub reservation_id: Uuid,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Amount before tax.
    pub subtotal: Decimal,
    /// Tax amount.
    pub tax_amount: Decimal,
    /// Total amount due.
    pub total: Decimal,
}

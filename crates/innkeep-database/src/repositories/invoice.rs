//! Invoice repository implementation.

use chrono::{Datelike, NaiveDate};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use innkeep_core::error::{AppError, ErrorKind};
use innkeep_core::result::AppResult;
use innkeep_entity::invoice::{CreateInvoice, Invoice};

/// Repository for invoice persistence.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: PgPool,
}

impl InvoiceRepository {
    /// Create a new invoice repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the invoice belonging to a reservation.
    pub async fn find_by_reservation(&self, reservation_id: Uuid) -> AppResult<Option<Invoice>> {
        sqlx::query_as::<_, Invoice>("SELECT * FROM invoices WHERE reservation_id = $1")
            .bind(reservation_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find invoice", e)
            })
    }

    /// Draw the next invoice number for the given issue year.
    ///
    /// Numbers come from a database sequence, so they are unique across
    /// concurrent writers: `INV-<year>-<zero-padded sequence>`.
    pub async fn next_invoice_number(
        &self,
        tx: &mut PgConnection,
        issue_date: NaiveDate,
    ) -> AppResult<String> {
        let seq: i64 = sqlx::query_scalar("SELECT nextval('invoice_number_seq')")
            .fetch_one(tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to draw invoice number", e)
            })?;

        Ok(format!("INV-{}-{:06}", issue_date.year(), seq))
    }

    /// Persist a new invoice inside an open transaction.
    ///
    /// Called in the same transaction as the reservation insert so the two
    /// records commit together or not at all.
    pub async fn create_in(
        &self,
        tx: &mut PgConnection,
        data: &CreateInvoice,
        invoice_number: &str,
        issue_date: NaiveDate,
    ) -> AppResult<Invoice> {
        sqlx::query_as::<_, Invoice>(
            "INSERT INTO invoices \
                 (reservation_id, invoice_number, issue_date, due_date, subtotal, tax_amount, total, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending') \
             RETURNING *",
        )
        .bind(data.reservation_id)
        .bind(invoice_number)
        .bind(issue_date)
        .bind(data.due_date)
        .bind(data.subtotal)
        .bind(data.tax_amount)
        .bind(data.total)
        .fetch_one(tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("invoices_invoice_number_key") =>
            {
                AppError::conflict(format!("Invoice number '{invoice_number}' already exists"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create invoice", e),
        })
    }
}

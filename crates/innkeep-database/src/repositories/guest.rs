//! Guest repository implementation.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use innkeep_core::error::{AppError, ErrorKind};
use innkeep_core::result::AppResult;
use innkeep_entity::guest::{CreateGuest, Guest};

/// Repository for guest lookup and creation.
#[derive(Debug, Clone)]
pub struct GuestRepository {
    pool: PgPool,
}

impl GuestRepository {
    /// Create a new guest repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a guest by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Guest>> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find guest by id", e)
            })
    }

    /// Find a guest by email inside an open transaction.
    pub async fn find_by_email_in(
        &self,
        tx: &mut PgConnection,
        email: &str,
    ) -> AppResult<Option<Guest>> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find guest by email", e)
            })
    }

    /// Create a guest inside an open transaction.
    pub async fn create_in(&self, tx: &mut PgConnection, data: &CreateGuest) -> AppResult<Guest> {
        sqlx::query_as::<_, Guest>(
            "INSERT INTO guests (first_name, last_name, email, phone, address, city, country) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.country)
        .fetch_one(tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("guests_email_key") => {
                AppError::conflict(format!("Guest with email '{}' already exists", data.email))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create guest", e),
        })
    }
}

//! Reservation repository implementation.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use innkeep_core::error::{AppError, ErrorKind};
use innkeep_core::result::AppResult;
use innkeep_core::types::pagination::{PageRequest, PageResponse};
use innkeep_entity::reservation::{CreateReservation, Reservation, ReservationStatus, StayWindow};

/// Name of the exclusion constraint guarding the no-overlap invariant.
const NO_OVERLAP_CONSTRAINT: &str = "reservations_no_overlap";

/// Repository for reservation persistence and conflict queries.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Create a new reservation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a reservation by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find reservation by id", e)
            })
    }

    /// List reservations with pagination, newest first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Reservation>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reservations")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count reservations", e)
            })?;

        let reservations = sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list reservations", e)
        })?;

        Ok(PageResponse::new(
            reservations,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Room ids among `room_ids` holding a non-cancelled reservation that
    /// overlaps the window.
    ///
    /// Overlap is the half-open test: an existing stay conflicts iff
    /// `existing.check_in < window.check_out AND
    ///  existing.check_out > window.check_in`.
    pub async fn booked_room_ids(
        &self,
        room_ids: &[Uuid],
        window: &StayWindow,
    ) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT DISTINCT room_id FROM reservations \
             WHERE room_id = ANY($1) \
               AND status <> 'cancelled' \
               AND check_in < $3 \
               AND check_out > $2",
        )
        .bind(room_ids)
        .bind(window.check_in)
        .bind(window.check_out)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to query booking conflicts", e)
        })
    }

    /// Same conflict query, inside an open transaction.
    pub async fn booked_room_ids_in(
        &self,
        tx: &mut PgConnection,
        room_ids: &[Uuid],
        window: &StayWindow,
    ) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT DISTINCT room_id FROM reservations \
             WHERE room_id = ANY($1) \
               AND status <> 'cancelled' \
               AND check_in < $3 \
               AND check_out > $2",
        )
        .bind(room_ids)
        .bind(window.check_in)
        .bind(window.check_out)
        .fetch_all(tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to query booking conflicts", e)
        })
    }

    /// Persist a new reservation inside an open transaction.
    ///
    /// The database-level exclusion constraint is the last line of defense
    /// against concurrent double booking; a violation surfaces as
    /// room-unavailable, not as an internal error.
    pub async fn create_in(
        &self,
        tx: &mut PgConnection,
        data: &CreateReservation,
    ) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations \
                 (guest_id, room_id, check_in, check_out, adults, children, status, total_amount, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(data.guest_id)
        .bind(data.room_id)
        .bind(data.window.check_in)
        .bind(data.window.check_out)
        .bind(data.adults)
        .bind(data.children)
        .bind(data.status)
        .bind(data.total_amount)
        .bind(&data.notes)
        .fetch_one(tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(NO_OVERLAP_CONSTRAINT) =>
            {
                AppError::room_unavailable(
                    "Room was booked by another guest for the requested dates",
                )
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create reservation", e),
        })
    }

    /// Update a reservation's lifecycle status.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: ReservationStatus,
    ) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update reservation status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))
    }
}

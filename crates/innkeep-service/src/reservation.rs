//! Reservation lifecycle service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use innkeep_core::AppError;
use innkeep_core::result::AppResult;
use innkeep_core::types::pagination::{PageRequest, PageResponse};
use innkeep_database::repositories::reservation::ReservationRepository;
use innkeep_entity::reservation::{Reservation, ReservationStatus};

/// Manages reservation listing and lifecycle transitions.
///
/// Transitions are guarded by the status state machine; an invalid move
/// (e.g. cancelling a checked-in stay) is a conflict, not a silent no-op.
#[derive(Debug, Clone)]
pub struct ReservationService {
    /// Reservation repository.
    reservation_repo: Arc<ReservationRepository>,
}

impl ReservationService {
    /// Create a new reservation service.
    pub fn new(reservation_repo: Arc<ReservationRepository>) -> Self {
        Self { reservation_repo }
    }

    /// List reservations with pagination, newest first.
    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<Reservation>> {
        self.reservation_repo.find_all(&page).await
    }

    /// Get a reservation, or a not-found error.
    pub async fn get(&self, id: Uuid) -> AppResult<Reservation> {
        self.reservation_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))
    }

    /// Check a confirmed guest in.
    pub async fn check_in(&self, id: Uuid) -> AppResult<Reservation> {
        self.transition(id, ReservationStatus::CheckedIn).await
    }

    /// Check a guest out.
    pub async fn check_out(&self, id: Uuid) -> AppResult<Reservation> {
        self.transition(id, ReservationStatus::CheckedOut).await
    }

    /// Cancel a reservation that has not been checked in.
    ///
    /// Cancellation is a status change, never a row deletion; the
    /// exclusion constraint ignores cancelled rows, so the room's dates
    /// become bookable again.
    pub async fn cancel(&self, id: Uuid) -> AppResult<Reservation> {
        self.transition(id, ReservationStatus::Cancelled).await
    }

    async fn transition(&self, id: Uuid, next: ReservationStatus) -> AppResult<Reservation> {
        let reservation = self.get(id).await?;

        if !reservation.status.can_transition_to(next) {
            return Err(AppError::conflict(format!(
                "Cannot move reservation {id} from {} to {next}",
                reservation.status
            )));
        }

        let updated = self.reservation_repo.update_status(id, next).await?;

        info!(
            reservation_id = %id,
            from = %reservation.status,
            to = %next,
            "Reservation status changed"
        );

        Ok(updated)
    }
}

//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use innkeep_core::config::AppConfig;

use innkeep_database::repositories::guest::GuestRepository;
use innkeep_database::repositories::invoice::InvoiceRepository;
use innkeep_database::repositories::reservation::ReservationRepository;
use innkeep_database::repositories::room::RoomRepository;
use innkeep_database::repositories::room_type::RoomTypeRepository;

use innkeep_service::availability::AvailabilityService;
use innkeep_service::booking::BookingService;
use innkeep_service::catalog::CatalogService;
use innkeep_service::pricing::PricingService;
use innkeep_service::reservation::ReservationService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Repositories ─────────────────────────────────────────
    /// Room type repository
    pub room_type_repo: Arc<RoomTypeRepository>,
    /// Room repository
    pub room_repo: Arc<RoomRepository>,
    /// Guest repository
    pub guest_repo: Arc<GuestRepository>,
    /// Reservation repository
    pub reservation_repo: Arc<ReservationRepository>,
    /// Invoice repository
    pub invoice_repo: Arc<InvoiceRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Catalog reader
    pub catalog_service: Arc<CatalogService>,
    /// Availability resolver
    pub availability_service: Arc<AvailabilityService>,
    /// Price calculator
    pub pricing_service: Arc<PricingService>,
    /// Booking writer
    pub booking_service: Arc<BookingService>,
    /// Reservation lifecycle service
    pub reservation_service: Arc<ReservationService>,
}

impl AppState {
    /// Build the full state graph from a config and a connected pool.
    pub fn build(config: AppConfig, db_pool: PgPool) -> Self {
        let room_type_repo = Arc::new(RoomTypeRepository::new(db_pool.clone()));
        let room_repo = Arc::new(RoomRepository::new(db_pool.clone()));
        let guest_repo = Arc::new(GuestRepository::new(db_pool.clone()));
        let reservation_repo = Arc::new(ReservationRepository::new(db_pool.clone()));
        let invoice_repo = Arc::new(InvoiceRepository::new(db_pool.clone()));

        let catalog_service = Arc::new(CatalogService::new(
            Arc::clone(&room_type_repo),
            Arc::clone(&room_repo),
        ));
        let availability_service = Arc::new(AvailabilityService::new(
            Arc::clone(&room_type_repo),
            Arc::clone(&room_repo),
            Arc::clone(&reservation_repo),
        ));
        let pricing_service = Arc::new(PricingService::new(
            Arc::clone(&room_type_repo),
            config.booking.clone(),
        ));
        let booking_service = Arc::new(BookingService::new(
            db_pool.clone(),
            Arc::clone(&room_type_repo),
            Arc::clone(&room_repo),
            Arc::clone(&guest_repo),
            Arc::clone(&reservation_repo),
            Arc::clone(&invoice_repo),
            config.booking.clone(),
        ));
        let reservation_service =
            Arc::new(ReservationService::new(Arc::clone(&reservation_repo)));

        Self {
            config: Arc::new(config),
            db_pool,
            room_type_repo,
            room_repo,
            guest_repo,
            reservation_repo,
            invoice_repo,
            catalog_service,
            availability_service,
            pricing_service,
            booking_service,
            reservation_service,
        }
    }
}

//! Repository layer
//!
//! One async trait per entity. The services only see these traits, so the
//! backing store can be swapped without touching the rules. The in-memory
//! implementations are seeded with the salon's default data.

pub mod bookings;
pub mod catalog;
pub mod resellers;
pub mod sales;
pub mod schedules;
pub mod seed;

use std::sync::Arc;

pub use bookings::BookingsRepository;
pub use catalog::CatalogRepository;
pub use resellers::ResellersRepository;
pub use sales::SalesRepository;
pub use schedules::ConfigRepository;

/// Main repository struct holding one handle per entity store
#[derive(Clone)]
pub struct Repository {
    pub config: Arc<dyn ConfigRepository>,
    pub bookings: Arc<dyn BookingsRepository>,
    pub sales: Arc<dyn SalesRepository>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub resellers: Arc<dyn ResellersRepository>,
}

impl Repository {
    /// In-memory stores loaded with the default schedule, catalog and resellers
    pub fn in_memory() -> Self {
        Self {
            config: Arc::new(schedules::MemoryConfigRepository::new(seed::default_schedule())),
            bookings: Arc::new(bookings::MemoryBookingsRepository::default()),
            sales: Arc::new(sales::MemorySalesRepository::default()),
            catalog: Arc::new(catalog::MemoryCatalogRepository::new(
                seed::default_services(),
                seed::default_products(),
            )),
            resellers: Arc::new(resellers::MemoryResellersRepository::new(
                seed::default_resellers(),
            )),
        }
    }
}

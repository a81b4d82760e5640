//! Business logic services

pub mod bookings;
pub mod catalog;
pub mod resellers;
pub mod sales;
pub mod schedules;

use std::sync::Arc;

use crate::{clock::Clock, config::AppConfig, engine::PricingEngine, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub schedules: schedules::SchedulesService,
    pub catalog: catalog::CatalogService,
    pub resellers: resellers::ResellersService,
    pub bookings: bookings::BookingsService,
    pub sales: sales::SalesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig, clock: Arc<dyn Clock>) -> Self {
        let pricing = PricingEngine::new(config.salon.reseller_threshold);

        Self {
            schedules: schedules::SchedulesService::new(repository.clone(), clock.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            resellers: resellers::ResellersService::new(repository.clone(), clock.clone()),
            bookings: bookings::BookingsService::new(repository.clone(), clock.clone()),
            sales: sales::SalesService::new(repository, clock, pricing),
        }
    }
}

//! Belo's Salon & Store
//!
//! Booking and retail server for a beauty salon. The interesting part lives
//! in [`engine`]: slot availability, the booking wizard, tiered pricing and
//! sale assembly. Everything around it is thin HTTP and storage plumbing.

use std::sync::Arc;

pub mod api;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

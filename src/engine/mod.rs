//! Availability and pricing rules engine
//!
//! Pure decision logic with no storage access: slot generation from the
//! weekly schedule, the booking wizard state machine, tiered pricing with
//! automatic reseller discounts, and sale assembly. Callers in
//! [`crate::services`] own persistence.

pub mod availability;
pub mod booking;
pub mod pricing;
pub mod sale;

pub use availability::{compute_slots, BookingWindow};
pub use booking::{BookingRequestValidator, BookingStep};
pub use pricing::{PricingEngine, PricingSession};
pub use sale::SaleAssembler;

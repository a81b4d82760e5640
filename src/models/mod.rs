//! Data models for the salon

pub mod booking;
pub mod catalog;
pub mod enums;
pub mod pricing;
pub mod reseller;
pub mod sale;
pub mod schedule;

// Re-export commonly used types
pub use booking::{Booking, BookingForm};
pub use catalog::{Product, Service};
pub use enums::{BookingStatus, BuyerClass, ItemType};
pub use pricing::{DiscountPolicy, DiscountTier, PricingResult};
pub use reseller::{CreateReseller, Reseller};
pub use sale::{Cart, CartLine, Sale};
pub use schedule::{DayAvailability, ScheduleConfig, TimeSlot, WorkDay};

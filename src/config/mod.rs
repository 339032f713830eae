//! Configuration loading and management for the Booking Availability Engine.
//!
//! This module provides the booking-rules policy type consumed by every
//! engine function, plus a loader for reading it from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use booking_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! assert_eq!(loader.rules().max_bookings_per_day, 3);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BookingRules, OperatingHours};

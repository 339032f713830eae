//! Core data models for the Booking Availability Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod booking;
mod calendar_day;

pub use booking::{Booking, BookingStatus, PackageType};
pub use calendar_day::CalendarDay;

//! Booking Availability Engine for a science-show booking portal.
//!
//! This crate provides the scheduling decision logic behind the booking
//! calendar: time-slot label parsing and formatting, day-level availability
//! rules (half-day exclusivity, daily capacity, inter-show buffer, operating
//! hours), bookable-slot list generation, and calendar-grid day descriptors.
//!
//! The engine is pure and stateless. Callers fetch booking records from
//! storage, pass them in together with a candidate date/package/time, and
//! receive an availability verdict back. The engine performs no I/O and
//! never mutates a booking record; the verdict is advisory at read time,
//! and write-time conflict guarding belongs to the storage layer.

#![warn(missing_docs)]

pub mod api;
pub mod availability;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;

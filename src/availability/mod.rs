//! Availability decision logic for the Booking Availability Engine.
//!
//! This module contains all the scheduling rules for the booking calendar:
//! time-slot label parsing and formatting, the per-day occupancy set,
//! half-day exclusivity, daily capacity, the inter-show buffer with its
//! same-customer/same-venue exemption, operating-hours enforcement,
//! bookable-slot list generation, and calendar-grid day descriptors.
//!
//! Every function here is a deterministic computation over its arguments:
//! no I/O, no shared mutable state, no locking. It is safe to call from
//! any number of threads or requests concurrently. The verdicts are
//! advisory at read time only; preventing two concurrent bookers from
//! writing the same slot is the storage layer's job.

mod calendar;
mod day_rules;
mod slot_list;
mod time_slot;

pub use calendar::build_calendar_days;
pub use day_rules::{
    SlotAvailability, UnavailableReason, bookings_for_date, has_half_day_booking,
    is_time_slot_available,
};
pub use slot_list::generate_time_slots;
pub use time_slot::{format_time_slot, parse_time_slot};

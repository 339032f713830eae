//! Booking-rules configuration types.
//!
//! This module contains the strongly-typed booking policy deserialized from
//! the YAML configuration file. The policy is passed explicitly into every
//! engine function rather than read from module scope, so tests can
//! exercise non-default capacity/buffer/hours policies without touching
//! shared state.

use serde::{Deserialize, Serialize};

/// The daily operating window for show start times.
///
/// Both endpoints are inclusive: with the default window of 8-16, the
/// earliest offerable slot is `"08:00 AM"` and the latest is `"04:00 PM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    /// Earliest bookable start hour, 24-hour form.
    pub start: u32,
    /// Latest bookable start hour, 24-hour form (inclusive).
    pub end: u32,
}

impl Default for OperatingHours {
    fn default() -> Self {
        Self { start: 8, end: 16 }
    }
}

/// The booking policy applied by the availability engine.
///
/// # Example
///
/// ```
/// use booking_engine::config::BookingRules;
///
/// let rules = BookingRules::default();
/// assert_eq!(rules.max_bookings_per_day, 3);
/// assert_eq!(rules.buffer_hours, 2);
/// assert_eq!(rules.operating_hours.start, 8);
/// assert_eq!(rules.operating_hours.end, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRules {
    /// Maximum ordinary (non-half-day) bookings permitted per calendar day.
    pub max_bookings_per_day: usize,
    /// Minimum gap in hours required between two shows on the same day.
    pub buffer_hours: i64,
    /// The operating window for show start times.
    #[serde(default)]
    pub operating_hours: OperatingHours,
}

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            max_bookings_per_day: 3,
            buffer_hours: 2,
            operating_hours: OperatingHours::default(),
        }
    }
}

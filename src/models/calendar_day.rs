//! Calendar day descriptor for the booking calendar grid.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One cell of the 6-row by 7-column booking calendar grid.
///
/// Descriptors have no independent lifecycle: the grid is recomputed from
/// the current booking list and selection state on every render, including
/// month navigation. See [`crate::availability::build_calendar_days`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The cell's calendar date.
    pub date: NaiveDate,
    /// Whether the date belongs to the month being displayed, as opposed
    /// to a leading/trailing day borrowed from an adjacent month.
    pub in_month: bool,
    /// Whether the date is today.
    pub is_today: bool,
    /// Whether the date is the currently selected date.
    pub is_selected: bool,
    /// Whether new bookings may be placed on this date: not in the past
    /// and not locked by a half-day booking.
    pub is_available: bool,
    /// Number of occupying (non-cancelled) bookings on this date.
    pub booking_count: usize,
}

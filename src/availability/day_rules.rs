//! Day-level availability rules.
//!
//! Given the bookings already placed on a calendar day, these functions
//! decide whether a new booking of a given package type may go on that day
//! at all, and whether a specific time slot on that day is free.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::BookingRules;
use crate::models::{Booking, PackageType};

use super::time_slot::{format_time_slot, parse_time_slot};

/// Why a requested slot is not available.
///
/// One variant per availability rule; [`std::fmt::Display`] produces the
/// fixed human-readable string shown to the booker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// The date already carries a half-day booking, which blocks every
    /// other booking on that date.
    HalfDayLock,
    /// A half-day booking was requested for a day that already has an
    /// occupying booking of any type.
    HalfDayRequiresEmptyDay,
    /// The day has reached the configured maximum of ordinary bookings.
    DailyCapacityReached,
    /// The requested slot is closer than the configured buffer to an
    /// existing show by a different party or at a different venue.
    BufferConflict {
        /// The configured minimum gap in hours.
        buffer_hours: i64,
    },
    /// The requested hour falls outside the operating window.
    OutsideOperatingHours {
        /// Earliest bookable start hour.
        start: u32,
        /// Latest bookable start hour (inclusive).
        end: u32,
    },
}

impl std::fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnavailableReason::HalfDayLock => {
                write!(f, "date blocked by half-day booking")
            }
            UnavailableReason::HalfDayRequiresEmptyDay => {
                write!(f, "half-day bookings require the entire day to be free")
            }
            UnavailableReason::DailyCapacityReached => {
                write!(f, "maximum bookings per day reached")
            }
            UnavailableReason::BufferConflict { buffer_hours } => {
                write!(f, "another show is within the {buffer_hours}-hour buffer")
            }
            UnavailableReason::OutsideOperatingHours { start, end } => {
                write!(
                    f,
                    "outside operating hours ({} - {})",
                    format_time_slot(*start),
                    format_time_slot(*end)
                )
            }
        }
    }
}

/// The verdict of an availability check.
///
/// "Unavailable" is a normal return value, never an error; the reason is
/// always present when `available` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAvailability {
    /// Whether the requested slot may be booked.
    pub available: bool,
    /// The first rule that rejected the request, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<UnavailableReason>,
}

impl SlotAvailability {
    /// An available verdict.
    pub fn available() -> Self {
        Self {
            available: true,
            reason: None,
        }
    }

    /// An unavailable verdict with the rejecting rule.
    pub fn unavailable(reason: UnavailableReason) -> Self {
        Self {
            available: false,
            reason: Some(reason),
        }
    }
}

/// Returns true if any non-cancelled booking on `date` is a half-day.
///
/// A half-day booking is exclusive: its presence blocks every other
/// booking of any package type from being placed on that date.
///
/// # Example
///
/// ```
/// use booking_engine::availability::has_half_day_booking;
/// use booking_engine::models::{Booking, BookingStatus, PackageType};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
/// let bookings = vec![Booking {
///     date,
///     time_slot: "09:00 AM".to_string(),
///     package_type: PackageType::HalfDay,
///     status: BookingStatus::Confirmed,
///     email: "carol@school.ae".to_string(),
///     address: "Park Towers, Dubai".to_string(),
/// }];
/// assert!(has_half_day_booking(&bookings, date));
/// ```
pub fn has_half_day_booking(bookings: &[Booking], date: NaiveDate) -> bool {
    bookings
        .iter()
        .any(|b| b.date == date && b.status.occupies_slot() && b.package_type.is_half_day())
}

/// Returns the occupancy set for a day: bookings on `date` whose status
/// still holds a slot (everything except cancelled).
///
/// Every other rule in this module operates on this result, not on the
/// raw input list.
pub fn bookings_for_date(bookings: &[Booking], date: NaiveDate) -> Vec<&Booking> {
    bookings
        .iter()
        .filter(|b| b.date == date && b.status.occupies_slot())
        .collect()
}

/// Decides whether a specific time slot on a date is free for a new
/// booking of the given package type.
///
/// Evaluates an ordered, short-circuiting sequence of checks; the first
/// failing check determines the verdict:
///
/// 1. Half-day lock on the date.
/// 2. Half-day requests need the whole day free.
/// 3. Daily capacity for ordinary bookings.
/// 4. Inter-show buffer against every existing booking on the day. A
///    compared booking is skipped when both its email and its address
///    match the requester's case-insensitively, so one customer can stack
///    back-to-back shows at a single venue. The exemption applies per
///    compared booking, not globally: one non-matching booking inside the
///    buffer still blocks the slot.
/// 5. Operating hours (inclusive window).
///
/// Cheap absolute disqualifiers run before the per-booking buffer scan.
/// The exemption match is intentionally narrow, exact equality on two
/// free-text fields; any formatting difference in the stored address
/// defeats it. A stable venue/customer identifier upstream would serve
/// the "same party at the same venue" requirement better.
///
/// # Example
///
/// ```
/// use booking_engine::availability::is_time_slot_available;
/// use booking_engine::config::BookingRules;
/// use booking_engine::models::PackageType;
/// use chrono::NaiveDate;
///
/// let rules = BookingRules::default();
/// let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
/// let verdict =
///     is_time_slot_available(&rules, &[], date, "09:00 AM", PackageType::Classic, None, None);
/// assert!(verdict.available);
/// ```
pub fn is_time_slot_available(
    rules: &BookingRules,
    bookings: &[Booking],
    date: NaiveDate,
    time_slot: &str,
    package_type: PackageType,
    customer_email: Option<&str>,
    customer_address: Option<&str>,
) -> SlotAvailability {
    if has_half_day_booking(bookings, date) {
        return SlotAvailability::unavailable(UnavailableReason::HalfDayLock);
    }

    let day_bookings = bookings_for_date(bookings, date);

    if package_type.is_half_day() && !day_bookings.is_empty() {
        return SlotAvailability::unavailable(UnavailableReason::HalfDayRequiresEmptyDay);
    }

    if !package_type.is_half_day() && day_bookings.len() >= rules.max_bookings_per_day {
        return SlotAvailability::unavailable(UnavailableReason::DailyCapacityReached);
    }

    let requested_hour = parse_time_slot(time_slot);
    for existing in &day_bookings {
        if same_party_same_venue(existing, customer_email, customer_address) {
            continue;
        }
        let existing_hour = parse_time_slot(&existing.time_slot);
        let gap = (i64::from(requested_hour) - i64::from(existing_hour)).abs();
        if gap < rules.buffer_hours {
            return SlotAvailability::unavailable(UnavailableReason::BufferConflict {
                buffer_hours: rules.buffer_hours,
            });
        }
    }

    if requested_hour < rules.operating_hours.start || requested_hour > rules.operating_hours.end {
        return SlotAvailability::unavailable(UnavailableReason::OutsideOperatingHours {
            start: rules.operating_hours.start,
            end: rules.operating_hours.end,
        });
    }

    SlotAvailability::available()
}

/// True when the existing booking belongs to the requesting customer at
/// the same venue: case-insensitive exact match on both email and address.
fn same_party_same_venue(
    existing: &Booking,
    customer_email: Option<&str>,
    customer_address: Option<&str>,
) -> bool {
    match (customer_email, customer_address) {
        (Some(email), Some(address)) => {
            existing.email.eq_ignore_ascii_case(email)
                && existing.address.eq_ignore_ascii_case(address)
        }
        _ => false,
    }
}

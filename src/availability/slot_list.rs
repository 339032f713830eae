//! Bookable time-slot list generation.
//!
//! Produces the ordered list of slot labels offered to a customer picking
//! a time for a new booking on a given date.

use chrono::NaiveDate;

use crate::config::BookingRules;
use crate::models::{Booking, PackageType};

use super::day_rules::{bookings_for_date, has_half_day_booking, is_time_slot_available};
use super::time_slot::format_time_slot;

/// Generates the ordered list of bookable slot labels for a date.
///
/// Short-circuits to an empty list when the date carries a half-day lock,
/// or when a half-day package is requested against a day that already has
/// any occupying booking; in both cases every slot would be rejected, so
/// there is nothing to generate and filter. Otherwise every whole hour of
/// the operating window (both endpoints included) is formatted, checked
/// with [`is_time_slot_available`], and included only when available.
///
/// The output is always ascending by hour and contains no duplicates.
///
/// # Example
///
/// ```
/// use booking_engine::availability::generate_time_slots;
/// use booking_engine::config::BookingRules;
/// use booking_engine::models::PackageType;
/// use chrono::NaiveDate;
///
/// let rules = BookingRules::default();
/// let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
/// let slots = generate_time_slots(&rules, &[], date, PackageType::Classic, None, None);
/// assert_eq!(slots.first().map(String::as_str), Some("08:00 AM"));
/// assert_eq!(slots.last().map(String::as_str), Some("04:00 PM"));
/// assert_eq!(slots.len(), 9);
/// ```
pub fn generate_time_slots(
    rules: &BookingRules,
    bookings: &[Booking],
    date: NaiveDate,
    package_type: PackageType,
    customer_email: Option<&str>,
    customer_address: Option<&str>,
) -> Vec<String> {
    if has_half_day_booking(bookings, date) {
        return Vec::new();
    }
    if package_type.is_half_day() && !bookings_for_date(bookings, date).is_empty() {
        return Vec::new();
    }

    let window = rules.operating_hours;
    (window.start..=window.end)
        .map(format_time_slot)
        .filter(|label| {
            is_time_slot_available(
                rules,
                bookings,
                date,
                label,
                package_type,
                customer_email,
                customer_address,
            )
            .available
        })
        .collect()
}

//! Time-slot label parsing and formatting.
//!
//! Slots throughout the portal are labels of the form `"09:00 AM"`: always
//! on the hour, no minute granularity. This module converts between those
//! labels and comparable 24-hour integer values.

use tracing::warn;

/// Parses a time-slot label into a 24-hour integer hour.
///
/// Accepts `"HH:MM AM|PM"` with a case-insensitive meridiem. 12 AM maps
/// to 0, 12 PM stays 12, and other PM hours add 12. Minutes are validated
/// but do not contribute to the result.
///
/// An unparseable label degrades to hour 0 rather than failing, for
/// compatibility with historically stored records; a warning is logged so
/// the degrade is never silent. Hour 0 is indistinguishable from a genuine
/// midnight slot, so callers that need strictness must validate the label
/// format upstream (see [`crate::validation`]).
///
/// # Example
///
/// ```
/// use booking_engine::availability::parse_time_slot;
///
/// assert_eq!(parse_time_slot("09:00 AM"), 9);
/// assert_eq!(parse_time_slot("12:00 AM"), 0);
/// assert_eq!(parse_time_slot("12:00 PM"), 12);
/// assert_eq!(parse_time_slot("04:00 pm"), 16);
/// assert_eq!(parse_time_slot("not a time"), 0);
/// ```
pub fn parse_time_slot(label: &str) -> u32 {
    match try_parse(label) {
        Some(hour) => hour,
        None => {
            warn!(label, "unparseable time-slot label, degrading to hour 0");
            0
        }
    }
}

fn try_parse(label: &str) -> Option<u32> {
    let mut parts = label.trim().split_whitespace();
    let time = parts.next()?;
    let meridiem = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let (hh, mm) = time.split_once(':')?;
    let hour: u32 = hh.parse().ok()?;
    let minute: u32 = mm.parse().ok()?;
    if !(1..=12).contains(&hour) || mm.len() != 2 || minute > 59 {
        return None;
    }

    if meridiem.eq_ignore_ascii_case("am") {
        Some(if hour == 12 { 0 } else { hour })
    } else if meridiem.eq_ignore_ascii_case("pm") {
        Some(if hour == 12 { 12 } else { hour + 12 })
    } else {
        None
    }
}

/// Formats a 24-hour integer hour as the canonical zero-padded slot label.
///
/// The input must be in 0-23; slots are always on the hour.
///
/// # Example
///
/// ```
/// use booking_engine::availability::format_time_slot;
///
/// assert_eq!(format_time_slot(0), "12:00 AM");
/// assert_eq!(format_time_slot(8), "08:00 AM");
/// assert_eq!(format_time_slot(12), "12:00 PM");
/// assert_eq!(format_time_slot(13), "01:00 PM");
/// ```
pub fn format_time_slot(hour: u32) -> String {
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display:02}:00 {meridiem}")
}

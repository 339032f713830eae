//! Calendar-grid day descriptors.
//!
//! Supports the booking calendar view: for a displayed month, produce the
//! per-day flags and counts the grid renderer needs, including the leading
//! and trailing days borrowed from adjacent months to fill the 6x7 grid.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{Booking, CalendarDay};

use super::day_rules::{bookings_for_date, has_half_day_booking};

/// Number of cells in the calendar grid: 6 rows of 7 days.
const GRID_CELLS: usize = 42;

/// Builds the 42 day descriptors for a displayed month.
///
/// The grid starts on the Sunday of the week containing the first of the
/// month and always spans six full weeks, so leading and trailing cells
/// belong to the adjacent months. For every cell:
///
/// - `in_month`: the cell's date falls in the displayed month;
/// - `is_today` / `is_selected`: equality against the supplied dates;
/// - `booking_count`: size of the date's occupancy set;
/// - `is_available`: the date is not in the past (today itself counts as
///   bookable) and carries no half-day lock. Remaining slot capacity is
///   irrelevant here; the grid only distinguishes "selectable at all".
///
/// The generator is pure and is re-run on every month navigation or
/// selection change.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] when `month` is outside 1-12.
///
/// # Example
///
/// ```
/// use booking_engine::availability::build_calendar_days;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
/// let days = build_calendar_days(&[], 2025, 6, today, None).unwrap();
/// assert_eq!(days.len(), 42);
/// ```
pub fn build_calendar_days(
    bookings: &[Booking],
    year: i32,
    month: u32,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> EngineResult<Vec<CalendarDay>> {
    let first_of_month =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidMonth { month })?;

    let lead_days = i64::from(first_of_month.weekday().num_days_from_sunday());
    let grid_start = first_of_month - Duration::days(lead_days);

    let days = (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = grid_start + Duration::days(offset);
            CalendarDay {
                date,
                in_month: date.year() == year && date.month() == month,
                is_today: date == today,
                is_selected: selected == Some(date),
                is_available: date >= today && !has_half_day_booking(bookings, date),
                booking_count: bookings_for_date(bookings, date).len(),
            }
        })
        .collect();

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingStatus, PackageType};
    use chrono::Weekday;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_booking(
        date_str: &str,
        time_slot: &str,
        package_type: PackageType,
        status: BookingStatus,
    ) -> Booking {
        Booking {
            date: make_date(date_str),
            time_slot: time_slot.to_string(),
            package_type,
            status,
            email: "a@x.com".to_string(),
            address: "1 First St".to_string(),
        }
    }

    // ==========================================================================
    // CAL-001: the grid is always 42 cells starting on a Sunday
    // ==========================================================================
    #[test]
    fn test_cal_001_grid_shape() {
        let today = make_date("2025-06-10");
        let days = build_calendar_days(&[], 2025, 6, today, None).unwrap();

        assert_eq!(days.len(), 42);
        assert_eq!(days[0].date.weekday(), Weekday::Sun);
        for pair in days.windows(2) {
            assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
        }
    }

    // ==========================================================================
    // CAL-002: June 2025 starts on a Sunday, so the grid opens on June 1
    // ==========================================================================
    #[test]
    fn test_cal_002_june_2025_alignment() {
        let today = make_date("2025-06-10");
        let days = build_calendar_days(&[], 2025, 6, today, None).unwrap();

        assert_eq!(days[0].date, make_date("2025-06-01"));
        assert_eq!(days[41].date, make_date("2025-07-12"));
        assert_eq!(days.iter().filter(|d| d.in_month).count(), 30);
        assert!(days[0].in_month);
        assert!(!days[30].in_month); // 2025-07-01
    }

    // ==========================================================================
    // CAL-003: a month not starting on Sunday borrows leading days
    // ==========================================================================
    #[test]
    fn test_cal_003_leading_days_borrowed() {
        // 2025-07-01 is a Tuesday; the grid starts on Sunday 2025-06-29.
        let today = make_date("2025-07-01");
        let days = build_calendar_days(&[], 2025, 7, today, None).unwrap();

        assert_eq!(days[0].date, make_date("2025-06-29"));
        assert!(!days[0].in_month);
        assert!(!days[1].in_month);
        assert!(days[2].in_month);
    }

    // ==========================================================================
    // CAL-004: past dates are never available, today is
    // ==========================================================================
    #[test]
    fn test_cal_004_past_dates_unavailable() {
        let today = make_date("2025-06-10");
        let days = build_calendar_days(&[], 2025, 6, today, None).unwrap();

        for day in &days {
            if day.date < today {
                assert!(!day.is_available, "{} is past and must be unavailable", day.date);
            } else {
                assert!(day.is_available, "{} is not past and has no lock", day.date);
            }
        }

        let today_cell = days.iter().find(|d| d.is_today).unwrap();
        assert_eq!(today_cell.date, today);
        assert!(today_cell.is_available);
    }

    // ==========================================================================
    // CAL-005: a half-day lock makes a future date unavailable
    // ==========================================================================
    #[test]
    fn test_cal_005_half_day_lock_unavailable() {
        let today = make_date("2025-06-10");
        let bookings = vec![make_booking(
            "2025-06-15",
            "09:00 AM",
            PackageType::HalfDay,
            BookingStatus::Confirmed,
        )];

        let days = build_calendar_days(&bookings, 2025, 6, today, None).unwrap();
        let locked = days.iter().find(|d| d.date == make_date("2025-06-15")).unwrap();

        assert!(!locked.is_available);
        assert_eq!(locked.booking_count, 1);
    }

    // ==========================================================================
    // CAL-006: remaining capacity does not affect grid availability
    // ==========================================================================
    #[test]
    fn test_cal_006_full_day_still_selectable() {
        let today = make_date("2025-06-10");
        let bookings = vec![
            make_booking("2025-06-15", "08:00 AM", PackageType::Classic, BookingStatus::Confirmed),
            make_booking("2025-06-15", "11:00 AM", PackageType::Classic, BookingStatus::Confirmed),
            make_booking("2025-06-15", "02:00 PM", PackageType::Classic, BookingStatus::Pending),
        ];

        let days = build_calendar_days(&bookings, 2025, 6, today, None).unwrap();
        let full = days.iter().find(|d| d.date == make_date("2025-06-15")).unwrap();

        // The day is at slot capacity, but it is still a selectable date;
        // the slot picker is what will come back empty.
        assert!(full.is_available);
        assert_eq!(full.booking_count, 3);
    }

    // ==========================================================================
    // CAL-007: cancelled bookings are not counted
    // ==========================================================================
    #[test]
    fn test_cal_007_cancelled_not_counted() {
        let today = make_date("2025-06-10");
        let bookings = vec![
            make_booking("2025-06-15", "08:00 AM", PackageType::Classic, BookingStatus::Cancelled),
            make_booking("2025-06-15", "11:00 AM", PackageType::HalfDay, BookingStatus::Cancelled),
        ];

        let days = build_calendar_days(&bookings, 2025, 6, today, None).unwrap();
        let day = days.iter().find(|d| d.date == make_date("2025-06-15")).unwrap();

        assert_eq!(day.booking_count, 0);
        assert!(day.is_available);
    }

    // ==========================================================================
    // CAL-008: the selected date is flagged, including out-of-month cells
    // ==========================================================================
    #[test]
    fn test_cal_008_selected_flag() {
        let today = make_date("2025-06-10");
        let selected = make_date("2025-07-01"); // trailing cell of the June grid
        let days = build_calendar_days(&[], 2025, 6, today, Some(selected)).unwrap();

        let flagged: Vec<_> = days.iter().filter(|d| d.is_selected).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].date, selected);
        assert!(!flagged[0].in_month);
    }

    // ==========================================================================
    // CAL-009: invalid months are rejected
    // ==========================================================================
    #[test]
    fn test_cal_009_invalid_month() {
        let today = make_date("2025-06-10");
        assert!(matches!(
            build_calendar_days(&[], 2025, 0, today, None),
            Err(EngineError::InvalidMonth { month: 0 })
        ));
        assert!(matches!(
            build_calendar_days(&[], 2025, 13, today, None),
            Err(EngineError::InvalidMonth { month: 13 })
        ));
    }
}

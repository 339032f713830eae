//! Booking record model and related types.
//!
//! This module defines the Booking struct plus the PackageType and
//! BookingStatus enums for representing show bookings in the portal.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The show package requested for a booking.
///
/// A closed enumeration: invalid package strings are rejected at the
/// deserialization boundary rather than silently mismatching in string
/// comparisons downstream.
///
/// [`PackageType::HalfDay`] has materially different occupancy semantics
/// from the other two variants: it monopolizes the entire day rather than
/// occupying a fixed number of hours, which is why it is a distinct case
/// and not a numeric duration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageType {
    /// A shorter show tailored to preschool audiences.
    Preschool,
    /// The standard classroom science show.
    Classic,
    /// A full-day engagement; monopolizes the whole day.
    #[serde(rename = "halfday")]
    HalfDay,
}

impl PackageType {
    /// Returns the fixed price for this package.
    ///
    /// # Example
    ///
    /// ```
    /// use booking_engine::models::PackageType;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(PackageType::Classic.price(), Decimal::new(900, 0));
    /// ```
    pub fn price(&self) -> Decimal {
        match self {
            PackageType::Preschool => Decimal::new(750, 0),
            PackageType::Classic => Decimal::new(900, 0),
            PackageType::HalfDay => Decimal::new(2500, 0),
        }
    }

    /// Returns the nominal show duration in hours.
    ///
    /// For [`PackageType::HalfDay`] this is the engagement length only;
    /// its occupancy rule is "the whole day", never this number.
    pub fn duration_hours(&self) -> u32 {
        match self {
            PackageType::Preschool => 1,
            PackageType::Classic => 1,
            PackageType::HalfDay => 4,
        }
    }

    /// Returns true for the full-day engagement package.
    pub fn is_half_day(&self) -> bool {
        matches!(self, PackageType::HalfDay)
    }
}

impl FromStr for PackageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preschool" => Ok(PackageType::Preschool),
            "classic" => Ok(PackageType::Classic),
            "halfday" => Ok(PackageType::HalfDay),
            other => Err(format!("unknown package type: {other}")),
        }
    }
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageType::Preschool => write!(f, "preschool"),
            PackageType::Classic => write!(f, "classic"),
            PackageType::HalfDay => write!(f, "halfday"),
        }
    }
}

/// Lifecycle status of a booking record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Submitted, awaiting admin review.
    Pending,
    /// Accepted by the admin.
    Confirmed,
    /// Cancelled; releases the slot.
    Cancelled,
    /// Declined by the admin; the slot stays held until cancelled.
    Rejected,
}

impl BookingStatus {
    /// Returns true if a booking with this status occupies its slot.
    ///
    /// Only [`BookingStatus::Cancelled`] releases a slot; pending,
    /// confirmed, and rejected bookings all keep it held.
    ///
    /// # Example
    ///
    /// ```
    /// use booking_engine::models::BookingStatus;
    ///
    /// assert!(BookingStatus::Pending.occupies_slot());
    /// assert!(!BookingStatus::Cancelled.occupies_slot());
    /// ```
    pub fn occupies_slot(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

/// A booking record as stored by the portal.
///
/// Read-only input to the availability engine: the engine only ever reads
/// these fields and never mutates a record. `email` and `address` exist
/// solely for the same-customer/same-venue buffer exemption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// The calendar day the show occurs.
    pub date: NaiveDate,
    /// The start time of the show as a label such as `"09:00 AM"`.
    pub time_slot: String,
    /// The show package booked.
    pub package_type: PackageType,
    /// Lifecycle status of the record.
    pub status: BookingStatus,
    /// The booking customer's email address.
    pub email: String,
    /// The venue address of the show.
    pub address: String,
}

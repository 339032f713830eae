//! Request types for the Booking Availability Engine API.
//!
//! This module defines the JSON request structures for the availability,
//! slot-list, and calendar endpoints. Every request carries the booking
//! records the storage layer fetched for the relevant date range; the
//! engine performs no I/O of its own.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Booking, BookingStatus, PackageType};

/// A booking record as supplied by the storage collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecordRequest {
    /// The calendar day the show occurs.
    pub date: NaiveDate,
    /// The start time label, such as `"09:00 AM"`.
    pub time_slot: String,
    /// The show package booked.
    pub package_type: PackageType,
    /// Lifecycle status of the record.
    pub status: BookingStatus,
    /// The booking customer's email address.
    #[serde(default)]
    pub email: String,
    /// The venue address of the show.
    #[serde(default)]
    pub address: String,
}

/// Request body for the `/availability` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    /// The candidate date.
    pub date: NaiveDate,
    /// The candidate slot label.
    pub time_slot: String,
    /// The requested show package.
    pub package_type: PackageType,
    /// Requester email, for the same-customer buffer exemption.
    #[serde(default)]
    pub customer_email: Option<String>,
    /// Requester venue address, for the same-customer buffer exemption.
    #[serde(default)]
    pub customer_address: Option<String>,
    /// Existing bookings covering the candidate date's range.
    #[serde(default)]
    pub bookings: Vec<BookingRecordRequest>,
}

/// Request body for the `/slots` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsRequest {
    /// The date to list bookable slots for.
    pub date: NaiveDate,
    /// The requested show package.
    pub package_type: PackageType,
    /// Requester email, for the same-customer buffer exemption.
    #[serde(default)]
    pub customer_email: Option<String>,
    /// Requester venue address, for the same-customer buffer exemption.
    #[serde(default)]
    pub customer_address: Option<String>,
    /// Existing bookings covering the date's range.
    #[serde(default)]
    pub bookings: Vec<BookingRecordRequest>,
}

/// Request body for the `/calendar` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarRequest {
    /// The displayed year.
    pub year: i32,
    /// The displayed month, 1-12.
    pub month: u32,
    /// Today's date, supplied by the caller so the engine stays pure.
    pub today: NaiveDate,
    /// The currently selected date, if any.
    #[serde(default)]
    pub selected: Option<NaiveDate>,
    /// Existing bookings covering the displayed month's grid.
    #[serde(default)]
    pub bookings: Vec<BookingRecordRequest>,
}

impl From<BookingRecordRequest> for Booking {
    fn from(req: BookingRecordRequest) -> Self {
        Booking {
            date: req.date,
            time_slot: req.time_slot,
            package_type: req.package_type,
            status: req.status,
            email: req.email,
            address: req.address,
        }
    }
}

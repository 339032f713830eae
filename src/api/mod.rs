//! HTTP API module for the Booking Availability Engine.
//!
//! This module provides the REST endpoints the booking portal calls to
//! check slot availability, list bookable slots, build the calendar grid,
//! and validate a booking form. The handlers are pure pass-throughs over
//! the engine: the caller supplies the month's booking records in the
//! request body, and no storage, email, or payment integration lives here.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AvailabilityRequest, BookingRecordRequest, CalendarRequest, SlotsRequest};
pub use response::{ApiError, AvailabilityResponse, CalendarResponse, SlotsResponse, ValidationResponse};
pub use state::AppState;

//! HTTP request handlers for the Booking Availability Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::availability::{build_calendar_days, generate_time_slots, is_time_slot_available};
use crate::models::Booking;
use crate::validation::{BookingForm, validate_booking_form};

use super::request::{AvailabilityRequest, CalendarRequest, SlotsRequest};
use super::response::{
    ApiError, ApiErrorResponse, AvailabilityResponse, CalendarResponse, SlotsResponse,
    ValidationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/availability", post(availability_handler))
        .route("/slots", post(slots_handler))
        .route("/calendar", post(calendar_handler))
        .route("/validate", post(validate_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to the API error body.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for the POST /availability endpoint.
///
/// Checks whether a specific slot on a date is free for the requested
/// package, given the booking records supplied in the body.
async fn availability_handler(
    State(state): State<AppState>,
    payload: Result<Json<AvailabilityRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing availability request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let bookings: Vec<Booking> = request.bookings.into_iter().map(Into::into).collect();
    let verdict = is_time_slot_available(
        state.config().rules(),
        &bookings,
        request.date,
        &request.time_slot,
        request.package_type,
        request.customer_email.as_deref(),
        request.customer_address.as_deref(),
    );

    info!(
        correlation_id = %correlation_id,
        date = %request.date,
        time_slot = %request.time_slot,
        package = %request.package_type,
        available = verdict.available,
        "Availability check completed"
    );

    (StatusCode::OK, Json(AvailabilityResponse::from(verdict))).into_response()
}

/// Handler for the POST /slots endpoint.
///
/// Returns the ordered list of bookable slot labels for a date.
async fn slots_handler(
    State(state): State<AppState>,
    payload: Result<Json<SlotsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing slot-list request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let bookings: Vec<Booking> = request.bookings.into_iter().map(Into::into).collect();
    let time_slots = generate_time_slots(
        state.config().rules(),
        &bookings,
        request.date,
        request.package_type,
        request.customer_email.as_deref(),
        request.customer_address.as_deref(),
    );

    info!(
        correlation_id = %correlation_id,
        date = %request.date,
        package = %request.package_type,
        slot_count = time_slots.len(),
        "Slot list generated"
    );

    (StatusCode::OK, Json(SlotsResponse { time_slots })).into_response()
}

/// Handler for the POST /calendar endpoint.
///
/// Builds the 42 day descriptors for a displayed month.
async fn calendar_handler(
    State(_state): State<AppState>,
    payload: Result<Json<CalendarRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calendar request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let bookings: Vec<Booking> = request.bookings.into_iter().map(Into::into).collect();
    match build_calendar_days(
        &bookings,
        request.year,
        request.month,
        request.today,
        request.selected,
    ) {
        Ok(days) => {
            info!(
                correlation_id = %correlation_id,
                year = request.year,
                month = request.month,
                "Calendar grid built"
            );
            (StatusCode::OK, Json(CalendarResponse { days })).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calendar request failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for the POST /validate endpoint.
///
/// Runs the accumulating form validation and reports every failure.
async fn validate_handler(
    payload: Result<Json<BookingForm>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing validation request");

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let response = match validate_booking_form(&form) {
        Ok(()) => ValidationResponse {
            valid: true,
            errors: Vec::new(),
        },
        Err(errors) => {
            info!(
                correlation_id = %correlation_id,
                error_count = errors.len(),
                "Form validation failed"
            );
            ValidationResponse {
                valid: false,
                errors,
            }
        }
    };

    (StatusCode::OK, Json(response)).into_response()
}

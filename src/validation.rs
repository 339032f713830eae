//! Form-level validation for booking submissions.
//!
//! A candidate submission arrives from the web form as loosely-typed
//! strings; this module checks every field and reports all violations
//! together, since the caller is presenting a single form back to a human
//! who benefits from seeing every problem at once. Validation is the one
//! place user-facing input errors surface; the availability engine itself
//! treats "unavailable" as a normal return value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::PackageType;

/// A candidate booking submission, as it arrives from the booking form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingForm {
    /// Customer name.
    #[serde(default)]
    pub name: String,
    /// Customer email address.
    #[serde(default)]
    pub email: String,
    /// Customer phone number.
    #[serde(default)]
    pub phone: String,
    /// Venue address for the show.
    #[serde(default)]
    pub address: String,
    /// The requested date, if one was picked.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// The requested slot label, if one was picked.
    #[serde(default)]
    pub time_slot: String,
    /// The requested package, as the raw form value.
    #[serde(default)]
    pub package_type: String,
}

/// Validates a booking form, accumulating every failure.
///
/// Never fail-fast: all fields are checked and all problems come back in
/// one list of human-readable strings. `Ok(())` means the form is clean.
///
/// # Example
///
/// ```
/// use booking_engine::validation::{BookingForm, validate_booking_form};
/// use chrono::NaiveDate;
///
/// let form = BookingForm {
///     name: "Carol".to_string(),
///     email: "carol@school.ae".to_string(),
///     phone: "+971 50 123 4567".to_string(),
///     address: "Park Towers, Dubai".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 10),
///     time_slot: "11:00 AM".to_string(),
///     package_type: "classic".to_string(),
/// };
/// assert!(validate_booking_form(&form).is_ok());
/// ```
pub fn validate_booking_form(form: &BookingForm) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if form.name.trim().chars().count() < 2 {
        errors.push("Name must be at least 2 characters".to_string());
    }

    if !is_plausible_email(form.email.trim()) {
        errors.push("Please enter a valid email address".to_string());
    }

    if !is_plausible_phone(form.phone.trim()) {
        errors.push("Please enter a valid phone number".to_string());
    }

    if form.address.trim().chars().count() < 5 {
        errors.push("Address must be at least 5 characters".to_string());
    }

    if form.date.is_none() {
        errors.push("Please select a date".to_string());
    }

    if form.time_slot.trim().is_empty() {
        errors.push("Please select a time slot".to_string());
    }

    if form.package_type.parse::<PackageType>().is_err() {
        errors.push("Please select a valid show package".to_string());
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Simple structural email check: one `@` with a non-empty local part and
/// a dotted, non-empty domain, no whitespace anywhere.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Phone numbers may contain digits and common punctuation only, and must
/// include at least one digit.
fn is_plausible_phone(phone: &str) -> bool {
    !phone.is_empty()
        && phone.chars().any(|c| c.is_ascii_digit())
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | '.' | ' '))
}

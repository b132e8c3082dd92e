//! Field validators.
//!
//! Each validator checks one raw value and logs the outcome: `info` when it
//! passes, `error` when it fails. Membership checks read [`ReferenceData`].

use std::sync::LazyLock;

use fastrace::trace;
use regex::Regex;
use roster_config::ReferenceData;
use roster_types::{FieldKind, MobileStatus, MAX_AGE, MOBILE_DIGITS};
use tracing::{error, info};

use crate::error::FieldError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$").expect("email pattern compiles")
});

#[trace]
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if !EMAIL_PATTERN.is_match(email) {
        error!("Invalid email format: {}", email);
        return Err(FieldError::Email);
    }
    info!("Valid email: {}", email);
    Ok(())
}

#[trace]
pub fn validate_age(age: i32) -> Result<(), FieldError> {
    if !(0..=MAX_AGE).contains(&age) {
        error!("Invalid age: {}", age);
        return Err(FieldError::Age);
    }
    info!("Valid age: {}", age);
    Ok(())
}

/// Well-formed numbers on the exclusion list come back as
/// [`MobileStatus::Excluded`]; only malformed numbers are errors.
#[trace]
pub fn validate_mobile(mobile: &str, reference: &ReferenceData) -> Result<MobileStatus, FieldError> {
    if mobile.len() != MOBILE_DIGITS || !mobile.bytes().all(|b| b.is_ascii_digit()) {
        error!("Invalid mobile number: {}", mobile);
        return Err(FieldError::Mobile);
    }
    if reference.is_excluded_number(mobile) {
        info!("Excluded mobile number: {}", mobile);
        return Ok(MobileStatus::Excluded);
    }
    info!("Valid mobile number: {}", mobile);
    Ok(MobileStatus::Valid)
}

#[trace]
pub fn validate_gender(gender: &str, reference: &ReferenceData) -> Result<(), FieldError> {
    if !reference.is_valid_gender(gender) {
        error!("Invalid gender: {}", gender);
        return Err(FieldError::Gender);
    }
    info!("Valid gender: {}", gender);
    Ok(())
}

#[trace]
pub fn validate_blood_group(blood_group: &str, reference: &ReferenceData) -> Result<(), FieldError> {
    if !reference.is_valid_blood_group(blood_group) {
        error!("Invalid blood group: {}", blood_group);
        return Err(FieldError::BloodGroup);
    }
    info!("Valid blood group: {}", blood_group);
    Ok(())
}

#[trace]
pub fn validate_country(country: &str, reference: &ReferenceData) -> Result<(), FieldError> {
    if !reference.is_valid_country(country) {
        error!("Invalid country: {}", country);
        return Err(FieldError::Country);
    }
    info!("Valid country: {}", country);
    Ok(())
}

/// Runs the validator for `field` on an unparsed value, as typed by a user.
/// Returns the mobile status for [`FieldKind::Mobile`], `None` otherwise.
pub fn validate_raw(
    field: FieldKind,
    value: &str,
    reference: &ReferenceData,
) -> Result<Option<MobileStatus>, FieldError> {
    match field {
        FieldKind::Email => validate_email(value).map(|_| None),
        FieldKind::Age => {
            let age = value.trim().parse::<i32>().map_err(|_| {
                error!("Invalid age: {}", value);
                FieldError::Age
            })?;
            validate_age(age).map(|_| None)
        }
        FieldKind::Mobile => validate_mobile(value, reference).map(Some),
        FieldKind::Gender => validate_gender(value, reference).map(|_| None),
        FieldKind::BloodGroup => validate_blood_group(value, reference).map(|_| None),
        FieldKind::Country => validate_country(value, reference).map(|_| None),
    }
}

//! Date validation rules for the search form.
//!
//! Each validator applies its rules in a fixed order and returns on the
//! first failure, so callers can rely on exactly which message surfaces
//! when several rules would reject the same input. Reordering the checks
//! is an observable behavior change.

use chrono::{NaiveDate, Utc};

use apod_api::ApodQuery;

use crate::dates;
use crate::error::ApodError;

pub(crate) const MSG_DATE_FORMAT: &str = "Date must be in yyyy-MM-dd format.";
pub(crate) const MSG_DATE_BEFORE_MIN: &str = "Date cannot be before June 16, 1995.";
pub(crate) const MSG_DATE_FUTURE: &str =
    "Date cannot be in the future. Please select today or an earlier date.";
pub(crate) const MSG_RANGE_REQUIRED: &str =
    "Both start date and end date are required for date range search.";
pub(crate) const MSG_START_FORMAT: &str = "Start date must be in yyyy-MM-dd format.";
pub(crate) const MSG_END_FORMAT: &str = "End date must be in yyyy-MM-dd format.";
pub(crate) const MSG_START_BEFORE_MIN: &str = "Start date cannot be before June 16, 1995.";
pub(crate) const MSG_END_BEFORE_MIN: &str = "End date cannot be before June 16, 1995.";
pub(crate) const MSG_START_FUTURE: &str =
    "Start date cannot be in the future. Please select today or an earlier date.";
pub(crate) const MSG_END_FUTURE: &str =
    "End date cannot be in the future. Please select today or an earlier date.";
pub(crate) const MSG_RANGE_ORDER: &str = "Start date cannot be after end date.";
pub(crate) const MSG_RANGE_SPAN: &str =
    "Date range cannot be more than 6 months. Please select a shorter date range.";

/// Outcome of validating a proposed query: either a query ready to
/// dispatch, or a human-readable rejection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted(ApodQuery),
    Rejected(String),
}

impl ValidationResult {
    fn rejected(message: &str) -> Self {
        Self::Rejected(message.to_string())
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Converts into a `Result`, mapping rejections to
    /// [`ApodError::InvalidInput`].
    pub fn into_result(self) -> Result<ApodQuery, ApodError> {
        match self {
            Self::Accepted(query) => Ok(query),
            Self::Rejected(message) => Err(ApodError::InvalidInput(message)),
        }
    }
}

/// Validates a single-date query against today's date.
pub fn validate_single(date: &str) -> ValidationResult {
    validate_single_on(date, Utc::now().date_naive())
}

/// Validates a single-date query against an explicit `today`.
pub fn validate_single_on(date: &str, today: NaiveDate) -> ValidationResult {
    // An empty date submits an empty query; the server answers with today.
    if date.is_empty() {
        return ValidationResult::Accepted(ApodQuery::default());
    }
    let parsed = match dates::parse_iso(date) {
        Some(d) => d,
        None => return ValidationResult::rejected(MSG_DATE_FORMAT),
    };
    if dates::is_before_min(parsed) {
        return ValidationResult::rejected(MSG_DATE_BEFORE_MIN);
    }
    if dates::is_in_future(parsed, today) {
        return ValidationResult::rejected(MSG_DATE_FUTURE);
    }
    ValidationResult::Accepted(ApodQuery::single(parsed))
}

/// Validates a range query against today's date.
pub fn validate_range(start: &str, end: &str) -> ValidationResult {
    validate_range_on(start, end, Utc::now().date_naive())
}

/// Validates a range query against an explicit `today`.
pub fn validate_range_on(start: &str, end: &str, today: NaiveDate) -> ValidationResult {
    if start.is_empty() || end.is_empty() {
        return ValidationResult::rejected(MSG_RANGE_REQUIRED);
    }
    let start_date = match dates::parse_iso(start) {
        Some(d) => d,
        None => return ValidationResult::rejected(MSG_START_FORMAT),
    };
    let end_date = match dates::parse_iso(end) {
        Some(d) => d,
        None => return ValidationResult::rejected(MSG_END_FORMAT),
    };
    if dates::is_before_min(start_date) {
        return ValidationResult::rejected(MSG_START_BEFORE_MIN);
    }
    if dates::is_before_min(end_date) {
        return ValidationResult::rejected(MSG_END_BEFORE_MIN);
    }
    if dates::is_in_future(start_date, today) {
        return ValidationResult::rejected(MSG_START_FUTURE);
    }
    if dates::is_in_future(end_date, today) {
        return ValidationResult::rejected(MSG_END_FUTURE);
    }
    if start_date > end_date {
        return ValidationResult::rejected(MSG_RANGE_ORDER);
    }
    if dates::is_range_too_large(start_date, end_date) {
        return ValidationResult::rejected(MSG_RANGE_SPAN);
    }
    ValidationResult::Accepted(ApodQuery::range(start_date, end_date))
}

//! Search form state: the selected mode, raw date inputs, and a transient
//! validation error that expires on its own.

use std::time::{Duration, Instant};

use chrono::{NaiveDate, Utc};

use apod_api::ApodQuery;

use crate::dates;
use crate::validation::{self, ValidationResult, MSG_RANGE_ORDER, MSG_RANGE_SPAN};

/// How long a rejection message stays visible before clearing itself.
pub const ERROR_TTL: Duration = Duration::from_secs(5);

/// Mutually exclusive query construction strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateMode {
    /// One specific day.
    Single,
    /// An inclusive start/end range.
    Range,
    /// No date at all; the server picks the current day.
    #[default]
    Today,
}

/// A rejection message with an expiry deadline, rather than a scheduled
/// callback that clears shared state later.
#[derive(Clone, Debug)]
struct TransientMessage {
    message: String,
    expires_at: Instant,
}

/// State behind the search form.
///
/// Holds the selected [`DateMode`], the raw date inputs, and the latest
/// validation error. Inputs are kept as entered; parsing happens inside
/// the validators so that format problems surface the same way as any
/// other rule violation.
#[derive(Clone, Debug, Default)]
pub struct SearchForm {
    mode: DateMode,
    date: String,
    start_date: String,
    end_date: String,
    error: Option<TransientMessage>,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DateMode {
        self.mode
    }

    /// Switches mode, clearing any pending error and resetting the fields
    /// the new mode does not use.
    pub fn set_mode(&mut self, mode: DateMode) {
        self.mode = mode;
        self.error = None;
        if mode != DateMode::Single {
            self.date.clear();
        }
        if mode != DateMode::Range {
            self.start_date.clear();
            self.end_date.clear();
        }
    }

    pub fn set_date(&mut self, date: &str) {
        self.date = date.to_string();
    }

    /// Updates the range start and re-checks the order and span rules
    /// when both ends are filled in.
    pub fn set_start_date(&mut self, start_date: &str) {
        self.start_date = start_date.to_string();
        self.revalidate_range(Instant::now());
    }

    /// Updates the range end; see [`set_start_date`](Self::set_start_date).
    pub fn set_end_date(&mut self, end_date: &str) {
        self.end_date = end_date.to_string();
        self.revalidate_range(Instant::now());
    }

    /// Runs the current mode's validator. "Today" mode always accepts an
    /// empty query. Rejections are recorded as a transient message
    /// retrievable via [`error_message`](Self::error_message).
    pub fn submit(&mut self) -> ValidationResult {
        self.submit_at(Utc::now().date_naive(), Instant::now())
    }

    /// [`submit`](Self::submit) against an explicit clock, for tests.
    pub fn submit_at(&mut self, today: NaiveDate, now: Instant) -> ValidationResult {
        let result = match self.mode {
            DateMode::Single => validation::validate_single_on(&self.date, today),
            DateMode::Range => {
                validation::validate_range_on(&self.start_date, &self.end_date, today)
            }
            DateMode::Today => ValidationResult::Accepted(ApodQuery::default()),
        };
        if let ValidationResult::Rejected(ref message) = result {
            tracing::debug!("search rejected: {}", message);
            self.show_error(message, now);
        }
        result
    }

    /// The pending error message, if one is set and not yet expired.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message_at(Instant::now())
    }

    /// [`error_message`](Self::error_message) against an explicit clock.
    pub fn error_message_at(&self, now: Instant) -> Option<&str> {
        self.error
            .as_ref()
            .filter(|e| now < e.expires_at)
            .map(|e| e.message.as_str())
    }

    fn show_error(&mut self, message: &str, now: Instant) {
        self.error = Some(TransientMessage {
            message: message.to_string(),
            expires_at: now + ERROR_TTL,
        });
    }

    // Live check while editing: only the order and span rules run here;
    // bounds and format are enforced on submit.
    fn revalidate_range(&mut self, now: Instant) {
        if self.start_date.is_empty() || self.end_date.is_empty() {
            return;
        }
        self.error = None;
        let (start, end) = match (
            dates::parse_iso(&self.start_date),
            dates::parse_iso(&self.end_date),
        ) {
            (Some(start), Some(end)) => (start, end),
            _ => return,
        };
        if start > end {
            self.show_error(MSG_RANGE_ORDER, now);
        } else if dates::is_range_too_large(start, end) {
            self.show_error(MSG_RANGE_SPAN, now);
        }
    }
}

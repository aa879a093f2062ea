//! Pure calendar helpers behind the validation rules.

use chrono::{Datelike, NaiveDate};

/// Widest span a single range query may cover, in whole calendar months.
pub const MAX_RANGE_MONTHS: i32 = 6;

/// The first Astronomy Picture of the Day was published on June 16, 1995;
/// nothing earlier exists in the archive.
pub fn min_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1995, 6, 16).expect("valid calendar date")
}

/// True when `date` predates the start of the archive.
pub fn is_before_min(date: NaiveDate) -> bool {
    date < min_date()
}

/// True when `date` is strictly after `today`. Comparison is by calendar
/// day; time of day never enters into it.
pub fn is_in_future(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Whole calendar months between two dates: the year/month difference,
/// minus one when `end`'s day-of-month has not yet reached `start`'s.
///
/// 2024-01-31 to 2024-07-01 is 5 months, not 6. That under-count is
/// observable behavior and must stay as is.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut months =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    if end.day() < start.day() {
        months -= 1;
    }
    months
}

/// True when the span from `start` to `end` exceeds [`MAX_RANGE_MONTHS`].
pub fn is_range_too_large(start: NaiveDate, end: NaiveDate) -> bool {
    months_between(start, end) > MAX_RANGE_MONTHS
}

/// Parses a `YYYY-MM-DD` string.
pub fn parse_iso(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

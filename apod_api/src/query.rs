//! Query parameters for the APOD endpoint.

use chrono::NaiveDate;
use url::Url;

/// Trait implemented by query builders. Provides URL serialization.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Date selection for an APOD request.
///
/// Exactly one of three shapes is sent per request: a single `date`, a
/// `start_date`/`end_date` pair, or nothing at all (the server answers with
/// today's entry). The constructors produce those shapes; mixing them is
/// not supported by the remote API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApodQuery {
    /// Single day to fetch.
    pub date: Option<NaiveDate>,
    /// First day of an inclusive range.
    pub start_date: Option<NaiveDate>,
    /// Last day of an inclusive range.
    pub end_date: Option<NaiveDate>,
}

impl ApodQuery {
    /// Query for one day's entry.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// Query for an inclusive date range.
    pub fn range(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
            ..Self::default()
        }
    }

    /// True when no date parameter is set, i.e. the server picks today.
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.start_date.is_none() && self.end_date.is_none()
    }
}

impl Query for ApodQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(date) = self.date {
            url.query_pairs_mut()
                .append_pair("date", &date.to_string());
        }
        if let Some(start_date) = self.start_date {
            url.query_pairs_mut()
                .append_pair("start_date", &start_date.to_string());
        }
        if let Some(end_date) = self.end_date {
            url.query_pairs_mut()
                .append_pair("end_date", &end_date.to_string());
        }
        url
    }
}

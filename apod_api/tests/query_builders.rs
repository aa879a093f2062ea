use apod_api::{ApodQuery, Query};
use chrono::NaiveDate;
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/planetary/apod").unwrap()
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn default_query_adds_nothing() {
    let query = ApodQuery::default();
    assert!(query.is_empty());
    let url = query.add_to_url(&base_url());
    assert_eq!(url.query(), None);
}

#[test]
fn single_query_sets_date_only() {
    let query = ApodQuery::single(date("2024-06-01"));
    assert!(!query.is_empty());
    let url = query.add_to_url(&base_url());
    assert_eq!(url.query(), Some("date=2024-06-01"));
}

#[test]
fn range_query_sets_both_bounds() {
    let query = ApodQuery::range(date("2024-01-01"), date("2024-03-15"));
    let url = query.add_to_url(&base_url());
    let q = url.query().unwrap();
    assert!(q.contains("start_date=2024-01-01"));
    assert!(q.contains("end_date=2024-03-15"));
    assert!(!q.contains("date=2024-06"));
}

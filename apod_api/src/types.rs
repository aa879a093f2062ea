//! Wire types for the APOD endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Media kind of an entry. The archive is mostly images with occasional
/// videos; anything the API invents later maps to `Other`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    #[serde(other)]
    Other,
}

/// One day's Astronomy Picture of the Day.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApodEntry {
    pub date: NaiveDate,
    pub title: String,
    pub explanation: String,
    pub media_type: MediaType,
    pub url: String,
    /// High-resolution variant; absent for videos.
    pub hdurl: Option<String>,
    /// Image credit. Absent on public-domain entries. The API pads this
    /// field with stray newlines.
    pub copyright: Option<String>,
    pub service_version: Option<String>,
}

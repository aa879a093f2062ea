//! Rendering of fetched entries as a table or JSON.

use anyhow::Result;
use apod_lib::types::{ApodEntry, MediaType};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct EntryRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Media")]
    #[serde(rename = "Media")]
    media: String,
    #[tabled(rename = "Copyright")]
    #[serde(rename = "Copyright")]
    copyright: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

fn media_label(media_type: MediaType) -> &'static str {
    match media_type {
        MediaType::Image => "image",
        MediaType::Video => "video",
        MediaType::Other => "other",
    }
}

fn build_entry_rows(entries: &[ApodEntry]) -> Vec<EntryRow> {
    entries
        .iter()
        .map(|e| EntryRow {
            date: e.date.to_string(),
            title: e.title.clone(),
            media: media_label(e.media_type).to_string(),
            // the API pads credits with newlines
            copyright: e.copyright.as_deref().map(str::trim).unwrap_or("").to_string(),
            url: e.url.clone(),
        })
        .collect()
}

pub fn print_entries(entries: &[ApodEntry], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_entries_table(entries),
        OutputFormat::Json => print_json(&entries)?,
    }
    Ok(())
}

fn print_entries_table(entries: &[ApodEntry]) {
    let rows = build_entry_rows(entries);
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    // a lone entry gets its explanation printed in full, card-style
    if let [entry] = entries {
        println!();
        println!("{}", entry.explanation);
        if let Some(hdurl) = &entry.hdurl {
            println!();
            println!("HD: {}", hdurl);
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(media_type: MediaType, copyright: Option<&str>) -> ApodEntry {
        ApodEntry {
            date: "2024-06-01".parse().unwrap(),
            title: "A Title".to_string(),
            explanation: "An explanation.".to_string(),
            media_type,
            url: "https://apod.nasa.gov/image/small.jpg".to_string(),
            hdurl: None,
            copyright: copyright.map(str::to_string),
            service_version: Some("v1".to_string()),
        }
    }

    #[test]
    fn rows_trim_copyright_padding() {
        let rows = build_entry_rows(&[entry(MediaType::Image, Some("\nJane Doe\n"))]);
        assert_eq!(rows[0].copyright, "Jane Doe");
    }

    #[test]
    fn rows_leave_missing_copyright_blank() {
        let rows = build_entry_rows(&[entry(MediaType::Video, None)]);
        assert_eq!(rows[0].copyright, "");
        assert_eq!(rows[0].media, "video");
    }

    #[test]
    fn rows_format_date_iso() {
        let rows = build_entry_rows(&[entry(MediaType::Image, None)]);
        assert_eq!(rows[0].date, "2024-06-01");
    }

    #[test]
    fn print_entries_succeeds_for_both_formats() {
        let entries = vec![entry(MediaType::Image, Some("Jane Doe"))];
        assert!(print_entries(&entries, &OutputFormat::Table).is_ok());
        assert!(print_entries(&entries, &OutputFormat::Json).is_ok());
    }
}

use apod_api::types::{ApodEntry, MediaType};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_single_entry() {
    let json = load_fixture("apod_single.json");
    let entry: ApodEntry = serde_json::from_str(&json).unwrap();

    assert_eq!(entry.date.to_string(), "2024-06-01");
    assert_eq!(entry.title, "Space Station between Meteor and Moon");
    assert_eq!(entry.media_type, MediaType::Image);
    assert_eq!(
        entry.url,
        "https://apod.nasa.gov/apod/image/2406/IssMoon_Yang_960.jpg"
    );
    assert_eq!(
        entry.hdurl.as_deref(),
        Some("https://apod.nasa.gov/apod/image/2406/IssMoon_Yang_2599.jpg")
    );
    // copyright arrives with the API's stray newlines intact
    assert_eq!(entry.copyright.as_deref(), Some("\nTianyao Yang\n"));
    assert_eq!(entry.service_version.as_deref(), Some("v1"));
}

#[test]
fn deserialize_range() {
    let json = load_fixture("apod_range.json");
    let entries: Vec<ApodEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].date.to_string(), "2024-01-01");
    assert_eq!(entries[2].title, "Quadrantids over the Apennines");
}

#[test]
fn video_entry_has_no_hdurl_or_copyright() {
    let json = load_fixture("apod_range.json");
    let entries: Vec<ApodEntry> = serde_json::from_str(&json).unwrap();

    let video = &entries[1];
    assert_eq!(video.media_type, MediaType::Video);
    assert!(video.hdurl.is_none());
    assert!(video.copyright.is_none());
}

#[test]
fn unknown_media_type_maps_to_other() {
    let json = r#"{
        "date": "2030-01-01",
        "explanation": "something new",
        "media_type": "hologram",
        "title": "Future Media",
        "url": "https://example.com/holo"
    }"#;
    let entry: ApodEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.media_type, MediaType::Other);
}

#[test]
fn invalid_date_is_an_error() {
    let json = r#"{
        "date": "not-a-date",
        "explanation": "x",
        "media_type": "image",
        "title": "x",
        "url": "https://example.com"
    }"#;
    assert!(serde_json::from_str::<ApodEntry>(json).is_err());
}

//! Unit tests for record timestamp parsing

use chrono::{TimeZone, Utc};

use super::{parse_iso_timestamp, Release};

#[test]
fn test_parse_iso_timestamp_with_offset() {
    let parsed = parse_iso_timestamp("2024-01-15T10:00:00Z").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap());

    let offset = parse_iso_timestamp("2024-01-15T12:00:00+02:00").unwrap();
    assert_eq!(offset, Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap());
}

#[test]
fn test_parse_iso_timestamp_naive_form() {
    let parsed = parse_iso_timestamp("2024-01-15T10:00:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap());
}

#[test]
fn test_parse_iso_timestamp_garbage() {
    assert!(parse_iso_timestamp("not-a-date").is_none());
    assert!(parse_iso_timestamp("").is_none());
}

#[test]
fn test_release_published_time() {
    let release = Release {
        release_id: "1".to_string(),
        version: "v1.0.0".to_string(),
        name: String::new(),
        author: "alice".to_string(),
        body: String::new(),
        published_at: "2024-01-15T10:00:00Z".to_string(),
        time_since_last_release: None,
        pr_count: 0,
    };

    assert!(release.published_time().is_some());
}

#[test]
fn test_release_deserializes_with_defaulted_fields() {
    let json = r#"{
        "release_id": "1",
        "version": "v1.0.0",
        "author": "alice",
        "published_at": "2024-01-15T10:00:00Z",
        "time_since_last_release": null
    }"#;

    let release: Release = serde_json::from_str(json).unwrap();
    assert_eq!(release.name, "");
    assert_eq!(release.body, "");
    assert_eq!(release.pr_count, 0);
    assert_eq!(release.time_since_last_release, None);
}

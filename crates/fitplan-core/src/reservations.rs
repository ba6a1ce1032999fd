//! Dated reservation list, as produced by the external reservation scraper.
//!
//! The document is JSON: `{ source, scraped_at, items }`, each item carrying
//! the vendor's column names verbatim ("Date & Time", "Event", "Location",
//! "Length"). Parsing fails closed: a record whose date cannot be read is
//! skipped, never included with a fabricated field.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::allocate::MandatoryEvent;
use crate::catalog::ActivityCatalog;
use crate::classify::EventClassifier;

/// One scraped reservation row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationItem {
    #[serde(rename = "Date & Time", default)]
    pub date_time: String,
    #[serde(rename = "Event", default)]
    pub event: String,
    #[serde(rename = "Location", default)]
    pub location: String,
    #[serde(rename = "Length", default)]
    pub length: String,
}

/// The scraper's output document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationList {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub scraped_at: Option<String>,
    #[serde(default)]
    pub items: Vec<ReservationItem>,
}

impl ReservationList {
    /// Load the reservation document. A missing file yields an empty list.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => return Self::default(),
        };
        serde_json::from_str(&text).unwrap_or_default()
    }

    /// Classify every parseable reservation and group by date, ascending.
    pub fn by_date(
        &self,
        classifier: &EventClassifier,
        catalog: &ActivityCatalog,
    ) -> BTreeMap<NaiveDate, Vec<MandatoryEvent>> {
        let mut grouped: BTreeMap<NaiveDate, Vec<MandatoryEvent>> = BTreeMap::new();
        for item in &self.items {
            let (date, time) = match parse_reservation_datetime(&item.date_time) {
                Some(parsed) => parsed,
                None => continue,
            };
            let name = if item.event.trim().is_empty() {
                match item.location.rsplit('>').next() {
                    Some(tail) if !tail.trim().is_empty() => tail.trim().to_string(),
                    _ => continue,
                }
            } else {
                item.event.trim().to_string()
            };
            let duration = parse_duration_minutes(&item.length);
            let points = classifier.classify(&name, &item.location, duration, catalog);
            grouped.entry(date).or_default().push(MandatoryEvent {
                name,
                time: Some(time),
                duration_minutes: duration,
                points,
                location: if item.location.is_empty() { None } else { Some(item.location.clone()) },
            });
        }
        grouped
    }
}

/// Parse a locale stamp like "1/9/2026, 9:00 AM" into a date and an HH:MM
/// 24-hour time string. Returns None on anything unrecognized.
pub fn parse_reservation_datetime(raw: &str) -> Option<(NaiveDate, String)> {
    let re = Regex::new(r"(?i)^\s*(\d{1,2})/(\d{1,2})/(\d{4}),?\s*(\d{1,2}):(\d{2})\s*(AM|PM)?").unwrap();
    let caps = re.captures(raw)?;
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    let mut hour: u32 = caps[4].parse().ok()?;
    let minute: u32 = caps[5].parse().ok()?;

    match caps.get(6).map(|m| m.as_str().to_ascii_uppercase()) {
        Some(ref ampm) if ampm == "PM" && hour < 12 => hour += 12,
        Some(ref ampm) if ampm == "AM" && hour == 12 => hour = 0,
        _ => {}
    }
    if hour > 23 || minute > 59 {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some((date, format!("{hour:02}:{minute:02}")))
}

/// Parse a free-text length like "60 Minutes" (first integer wins, 60 when
/// absent).
pub fn parse_duration_minutes(raw: &str) -> u32 {
    let re = Regex::new(r"(\d+)").unwrap();
    re.captures(raw)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(60)
}

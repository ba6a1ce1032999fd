//! Recurring weekly schedule document.
//!
//! The schedule carries the challenge boundaries and a set of events, each
//! with its own point value, duration, and weekly occurrences. Scheduled
//! events keep their declared points; only reservations go through the
//! classifier.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::allocate::MandatoryEvent;
use crate::error::Result;

/// One weekly occurrence of a scheduled event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Occurrence {
    /// Weekday name; matched case-insensitively on its first three letters
    /// ("Mon", "monday", "MONDAYS" all hit Monday).
    pub weekday: String,
    /// Start time as HH:MM.
    pub time: Option<String>,
}

/// A recurring event in the weekly schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub name: String,
    #[serde(default)]
    pub points: u32,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub occurrences: Vec<Occurrence>,
}

fn default_duration() -> u32 {
    30
}

/// The recurring schedule document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub challenge_start: Option<NaiveDate>,
    pub challenge_end: Option<NaiveDate>,
    #[serde(default)]
    pub events: Vec<ScheduledEvent>,
}

/// Map a weekday name to chrono's Monday-based index (0–6) by its first
/// three characters, case-insensitively.
pub fn weekday_index(name: &str) -> Option<u32> {
    let prefix: String = name.chars().take(3).collect::<String>().to_lowercase();
    match prefix.as_str() {
        "mon" => Some(0),
        "tue" => Some(1),
        "wed" => Some(2),
        "thu" => Some(3),
        "fri" => Some(4),
        "sat" => Some(5),
        "sun" => Some(6),
        _ => None,
    }
}

impl Schedule {
    /// Load a schedule document from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Mandatory events occurring on `date`, in document order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<MandatoryEvent> {
        let wd = date.weekday().num_days_from_monday();
        let mut out = Vec::new();
        for event in &self.events {
            for occ in &event.occurrences {
                if weekday_index(&occ.weekday) == Some(wd) {
                    out.push(MandatoryEvent {
                        name: event.name.clone(),
                        time: occ.time.clone(),
                        duration_minutes: event.duration_minutes,
                        points: event.points,
                        location: None,
                    });
                }
            }
        }
        out
    }
}

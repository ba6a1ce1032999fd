//! Progress-log tooling: daily entry templates and future-only
//! materialization of scheduled events into the log.
//!
//! The log is an append-only text file of dated blocks headed by
//! `Date: YYYY-MM-DD`. Existing blocks are never rewritten.

use chrono::{Days, NaiveDate};
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{CoreError, Result};
use crate::schedule::Schedule;

const LOG_BANNER: &str = "Fitplan — Daily Progress Log\n\n";

/// Dates that already have a block in the log text.
pub fn existing_dates(text: &str) -> BTreeSet<NaiveDate> {
    let re = Regex::new(r"(?m)^Date:\s*(\d{4}-\d{2}-\d{2})\s*$").unwrap();
    re.captures_iter(text)
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}

/// The boilerplate block appended for a fresh day.
pub fn entry_template(date: NaiveDate) -> String {
    format!(
        "Date: {date}\n\
         Activities:\n\
         - Bike commute (30 min): __ pts\n\
         - Primary activity: __ pts\n\
         - Secondary activity: __ pts\n\
         - Stretch / rehab: __ pts\n\
         - Bonus / Whiteboard: __ pts\n\
         \n\
         Daily Total:\n\
         How I felt (1-5):\n\
         Notes (optional):\n\n"
    )
}

/// Append one template block to the log, creating the file (with its
/// banner) when missing.
pub fn append_entry(path: &Path, date: NaiveDate) -> Result<()> {
    let mut text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(_) => LOG_BANNER.to_string(),
    };
    text.push_str(&entry_template(date));
    std::fs::write(path, text)?;
    Ok(())
}

/// Append prefilled blocks for dates in `[start, end]` that are missing
/// from the log and not in the past. Returns the dates added.
///
/// Blocks for days with scheduled events list each event with its time and
/// points and carry the summed daily total; other days get the empty
/// template shape.
pub fn materialize(
    path: &Path,
    schedule: &Schedule,
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> Result<Vec<NaiveDate>> {
    let text = std::fs::read_to_string(path).map_err(|_| CoreError::LogNotFound(path.into()))?;
    let existing = existing_dates(&text);

    let mut added = Vec::new();
    let mut blocks = String::new();
    let mut date = start;
    while date <= end {
        if !existing.contains(&date) && date >= today {
            blocks.push_str(&materialized_block(schedule, date));
            added.push(date);
        }
        date = date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| CoreError::InvalidDate(date.to_string()))?;
    }

    if !added.is_empty() {
        let mut out = text;
        out.push('\n');
        out.push_str(&blocks);
        std::fs::write(path, out)?;
    }
    Ok(added)
}

fn materialized_block(schedule: &Schedule, date: NaiveDate) -> String {
    let events = schedule.events_on(date);
    if events.is_empty() {
        return format!(
            "Date: {date}\nActivities:\n\nDaily Total (activity points): 0\n\n\
             Weekly Bonus / Event today: None\nHow I felt (1-5):\nNotes (optional):\n\n"
        );
    }
    let mut lines = vec![format!("Date: {date}"), "Activities:".to_string()];
    let mut total = 0;
    for event in &events {
        let time = event.time.as_deref().unwrap_or("--:--");
        lines.push(format!("- {} ({}) — {} pts", event.name, time, event.points));
        total += event.points;
    }
    lines.push(String::new());
    lines.push(format!("Daily Total (activity points): {total}"));
    lines.push(String::new());
    lines.push("Weekly Bonus / Event today: None".to_string());
    lines.push("How I felt (1-5):".to_string());
    lines.push("Notes (optional):".to_string());
    lines.push(String::new());
    lines.push(String::new());
    lines.join("\n")
}

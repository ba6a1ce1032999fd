//! iCalendar export of a computed plan.
//!
//! Emits one VEVENT per plan item (timed items keep their start and
//! duration, untimed ones land at 07:00 for 30 minutes) plus one
//! daily-summary VEVENT per date, each with a display alarm 15 minutes
//! before the event.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

use crate::allocate::DayPlan;
use crate::plan::Plan;

const CALENDAR_NAME: &str = "Fitplan Challenge";
const PRODID: &str = "-//Fitplan//Plan//EN";
const DEFAULT_START: (u32, u32) = (7, 0);
const DEFAULT_MINUTES: i64 = 30;

/// Render a plan as iCalendar text.
pub fn plan_to_ics(plan: &Plan) -> String {
    let stamp = dtstamp();
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        format!("X-WR-CALNAME:{CALENDAR_NAME}"),
        "X-WR-TIMEZONE:UTC".to_string(),
        format!("DTSTAMP:{stamp}"),
    ];

    for day in &plan.daily {
        for item in &day.items {
            let start = match item.time.as_deref().and_then(parse_hhmm) {
                Some(time) => day.date.and_time(time),
                None => default_start(day.date),
            };
            let minutes = item.duration_minutes.map(i64::from).unwrap_or(DEFAULT_MINUTES);
            let end = start + TimeDelta::minutes(minutes);
            let description = if item.points > 0 {
                format!("{} — {} pt", item.name, item.points)
            } else {
                item.name.clone()
            };
            push_event(
                &mut lines,
                &uid("item", day.date, &item.name),
                &stamp,
                start,
                end,
                &item.name,
                &description,
            );
        }
        push_event(
            &mut lines,
            &uid("day", day.date, ""),
            &stamp,
            default_start(day.date),
            default_start(day.date) + TimeDelta::minutes(DEFAULT_MINUTES),
            &format!("{CALENDAR_NAME} — Daily Plan"),
            &summary_description(day),
        );
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join("\n")
}

fn push_event(
    lines: &mut Vec<String>,
    uid: &str,
    stamp: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
    summary: &str,
    description: &str,
) {
    lines.extend([
        "BEGIN:VEVENT".to_string(),
        format!("UID:{uid}"),
        format!("DTSTAMP:{stamp}"),
        format!("DTSTART:{}", start.format("%Y%m%dT%H%M00")),
        format!("DTEND:{}", end.format("%Y%m%dT%H%M00")),
        format!("SUMMARY:{}", escape_text(summary)),
        format!("DESCRIPTION:{}", escape_text(description)),
        "BEGIN:VALARM".to_string(),
        "TRIGGER:-PT15M".to_string(),
        "ACTION:DISPLAY".to_string(),
        format!("DESCRIPTION:Reminder - {CALENDAR_NAME}"),
        "END:VALARM".to_string(),
        "END:VEVENT".to_string(),
    ]);
}

fn summary_description(day: &DayPlan) -> String {
    let mut parts: Vec<String> = day
        .items
        .iter()
        .filter(|it| it.recommended)
        .map(|it| format!("{} ({} pt)", it.name, it.points))
        .collect();
    parts.push(format!("Daily Total (activity points): {}", day.total_points));
    parts.join("\n")
}

/// Deterministic UID from the date and a slugged name.
fn uid(kind: &str, date: NaiveDate, name: &str) -> String {
    let slug: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    format!("fitplan-{kind}-{date}-{slug}@fitplan.local")
}

fn default_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(DEFAULT_START.0, DEFAULT_START.1, 0).unwrap())
}

fn parse_hhmm(raw: &str) -> Option<NaiveTime> {
    let (h, m) = raw.split_once(':')?;
    NaiveTime::from_hms_opt(h.parse().ok()?, m.parse().ok()?, 0)
}

fn dtstamp() -> String {
    Utc::now().format("%Y%m%dT%H%M%SZ").to_string()
}

/// RFC 5545 TEXT escaping.
fn escape_text(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\r', "")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocate::{DayPlan, PlanItem};

    fn item(name: &str, points: u32, time: Option<&str>, minutes: Option<u32>) -> PlanItem {
        PlanItem {
            name: name.into(),
            points,
            time: time.map(String::from),
            duration_minutes: minutes,
            location: None,
            recommended: true,
        }
    }

    fn sample_plan() -> Plan {
        let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        Plan {
            challenge_start: date,
            challenge_end: date,
            daily: vec![DayPlan {
                date,
                items: vec![
                    item("Pickleball Open Play", 4, Some("09:00"), Some(60)),
                    item("Stretch", 3, None, None),
                ],
                extras: vec![],
                total_points: 7,
            }],
        }
    }

    #[test]
    fn one_event_per_item_plus_daily_summary() {
        let ics = plan_to_ics(&sample_plan());
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
        assert_eq!(ics.matches("TRIGGER:-PT15M").count(), 3);
        assert!(ics.starts_with("BEGIN:VCALENDAR"));
        assert!(ics.ends_with("END:VCALENDAR"));
    }

    #[test]
    fn timed_items_keep_their_time_and_duration() {
        let ics = plan_to_ics(&sample_plan());
        assert!(ics.contains("DTSTART:20260112T090000"));
        assert!(ics.contains("DTEND:20260112T100000"));
        // Untimed item defaults to 07:00 for 30 minutes.
        assert!(ics.contains("DTSTART:20260112T070000"));
        assert!(ics.contains("DTEND:20260112T073000"));
    }

    #[test]
    fn summary_event_lists_total() {
        let ics = plan_to_ics(&sample_plan());
        assert!(ics.contains("Daily Total (activity points): 7"));
        assert!(ics.contains("UID:fitplan-day-2026-01-12-@fitplan.local"));
        assert!(ics.contains("UID:fitplan-item-2026-01-12-pickleballopenplay@fitplan.local"));
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape_text("a,b;c\nd"), "a\\,b\\;c\\nd");
    }
}

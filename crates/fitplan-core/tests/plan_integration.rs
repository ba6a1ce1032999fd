//! Integration tests for end-to-end plan generation.
//!
//! These tests drive the full pipeline from temp files: catalog + rules +
//! reservations + schedule in, plan invariants and serialized output out.

use chrono::NaiveDate;
use fitplan_core::{
    load_daily_cap, ActivityCatalog, EventClassifier, PlanBuilder, ReservationList, Schedule,
};
use std::fs;

const ACTIVITIES: &str = "\
ACTIVITY CATALOG
- 15-minute walk — 2 pts
- 30-minute walk — 3 pts
- Stretch / rehab — 3 pts
- Rehab session — 4 pts
- Bike commute (30 min round trip) — 2 pts
";

const RULES: &str = "Challenge rules\nDaily Total (activity points): 18 max\n";

const SCHEDULE: &str = r#"{
    "challenge_start": "2026-01-12",
    "challenge_end": "2026-01-18",
    "events": [
        {"name": "Strength Class", "points": 5, "duration_minutes": 45,
         "occurrences": [{"weekday": "Tue", "time": "17:30"}, {"weekday": "Thu", "time": "17:30"}]}
    ]
}"#;

const RESERVATIONS: &str = r#"{
    "source": "downloads/list.html",
    "scraped_at": "2026-01-08T12:00:00Z",
    "items": [
        {"Date & Time": "1/12/2026, 9:00 AM", "Event": "Pickleball Open Play",
         "Location": "Club > Court Sports", "Length": "60 Minutes"},
        {"Date & Time": "1/13/2026, 8:00 AM", "Event": "Sunrise Yoga",
         "Location": "Club > Fitness", "Length": "60 Minutes"},
        {"Date & Time": "garbage", "Event": "Ignored", "Location": "", "Length": ""}
    ]
}"#;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
}

fn build_plan(dir: &std::path::Path) -> fitplan_core::Plan {
    fs::write(dir.join("activities.txt"), ACTIVITIES).unwrap();
    fs::write(dir.join("rules.txt"), RULES).unwrap();
    fs::write(dir.join("schedule.json"), SCHEDULE).unwrap();
    fs::write(dir.join("active_reservations.json"), RESERVATIONS).unwrap();

    let catalog = ActivityCatalog::load(&dir.join("activities.txt"));
    let cap = load_daily_cap(&dir.join("rules.txt"));
    assert_eq!(cap, 18);
    let schedule = Schedule::load(&dir.join("schedule.json")).unwrap();
    let reservations = ReservationList::load(&dir.join("active_reservations.json"));
    let grouped = reservations.by_date(&EventClassifier::new(), &catalog);

    PlanBuilder::new(catalog, cap)
        .with_schedule(schedule)
        .with_reservations(grouped)
        .build(None)
        .unwrap()
}

#[test]
fn full_pipeline_covers_every_date_and_respects_cap() {
    let dir = tempfile::tempdir().unwrap();
    let plan = build_plan(dir.path());

    assert_eq!(plan.challenge_start, date(12));
    assert_eq!(plan.challenge_end, date(18));
    assert_eq!(plan.daily.len(), 7);

    let mut expected = date(12);
    for day in &plan.daily {
        assert_eq!(day.date, expected);
        let recommended: u32 = day.items.iter().filter(|it| it.recommended).map(|it| it.points).sum();
        assert_eq!(day.total_points, recommended);
        assert!(day.total_points <= 18);
        expected = expected.succ_opt().unwrap();
    }
}

#[test]
fn reservation_days_shadow_the_schedule_and_trigger_the_bike_bonus() {
    let dir = tempfile::tempdir().unwrap();
    let plan = build_plan(dir.path());

    // Monday: pickleball reservation (60 min court sport → 4 pts) plus bike
    // bonus from the catalog (2 pts), then filler toward 18.
    let monday = &plan.daily[0];
    let pickleball = monday.items.iter().find(|it| it.name == "Pickleball Open Play").unwrap();
    assert_eq!(pickleball.points, 4);
    assert!(monday.items.iter().any(|it| it.name.starts_with("Bike commute")));

    // Tuesday has both a reservation and a scheduled class; the reservation
    // is the authoritative source for that date.
    let tuesday = &plan.daily[1];
    assert!(tuesday.items.iter().any(|it| it.name == "Sunrise Yoga"));
    assert!(tuesday.items.iter().all(|it| it.name != "Strength Class"));
    // Group-fitness rule outranks the bonus rule for "Sunrise Yoga".
    let yoga = tuesday.items.iter().find(|it| it.name == "Sunrise Yoga").unwrap();
    assert_eq!(yoga.points, 5);

    // Thursday has no reservation: the scheduled class shows up.
    let thursday = &plan.daily[3];
    assert!(thursday.items.iter().any(|it| it.name == "Strength Class" && it.points == 5));
}

#[test]
fn repeated_runs_serialize_identically() {
    let dir = tempfile::tempdir().unwrap();
    let a = build_plan(dir.path()).to_json_pretty().unwrap();
    let b = build_plan(dir.path()).to_json_pretty().unwrap();
    assert_eq!(a, b);
}

#[test]
fn missing_optional_inputs_degrade_instead_of_failing() {
    let dir = tempfile::tempdir().unwrap();
    // Only the schedule exists; catalog, rules, and reservations are absent.
    fs::write(dir.path().join("schedule.json"), SCHEDULE).unwrap();

    let catalog = ActivityCatalog::load(&dir.path().join("activities.txt"));
    assert!(catalog.is_empty());
    let cap = load_daily_cap(&dir.path().join("rules.txt"));
    assert_eq!(cap, fitplan_core::DEFAULT_DAILY_CAP);
    let reservations = ReservationList::load(&dir.path().join("active_reservations.json"));
    let grouped = reservations.by_date(&EventClassifier::new(), &catalog);

    let schedule = Schedule::load(&dir.path().join("schedule.json")).unwrap();
    let plan = PlanBuilder::new(catalog, cap)
        .with_schedule(schedule)
        .with_reservations(grouped)
        .build(None)
        .unwrap();
    assert_eq!(plan.daily.len(), 7);
}

//! # Fitplan Core Library
//!
//! Core business logic for Fitplan: turns a personal activity catalog, a
//! rules document, a recurring weekly schedule, and a dated reservation list
//! into a capped daily point-allocation plan, plus serializers for the plan
//! (JSON, iCalendar) and tooling for the progress log. Everything is a
//! single-pass, deterministic batch transform over flat files; the CLI
//! binary is a thin layer over this crate.
//!
//! ## Key components
//!
//! - [`ActivityCatalog`]: ordered activity list with a lowercase point lookup
//! - [`EventClassifier`]: ordered first-match-wins rule table for points
//! - [`DailyAllocator`]: the per-day cap packer (mandatory pass, conditional
//!   bike-commute bonus, exact filler selection)
//! - [`PlanBuilder`]: one allocated [`DayPlan`] per date across the range
//! - [`plan_to_ics`]: calendar export with per-item and daily-summary events

pub mod allocate;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod error;
pub mod ics;
pub mod logfile;
pub mod plan;
pub mod reservations;
pub mod rules;
pub mod schedule;

pub use allocate::{DailyAllocator, DayPlan, ExtraItem, MandatoryEvent, PlanItem, EXCEEDS_DAILY_CAP};
pub use catalog::{ActivityCatalog, ActivityEntry};
pub use classify::EventClassifier;
pub use config::Config;
pub use error::{CoreError, Result};
pub use ics::plan_to_ics;
pub use plan::{Plan, PlanBuilder};
pub use reservations::{ReservationItem, ReservationList};
pub use rules::{load_daily_cap, parse_daily_cap, DEFAULT_DAILY_CAP};
pub use schedule::{Occurrence, Schedule, ScheduledEvent};

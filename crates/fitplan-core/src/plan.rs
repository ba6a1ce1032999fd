//! Plan building: one allocated day per date across the challenge range.
//!
//! Reservations are the primary mandatory-event source; on dates without
//! reservations the recurring schedule supplies the events. The range comes
//! from an explicit request, the configuration, or the schedule boundaries,
//! in that order — with none of the three, building is a hard usage error
//! and nothing is written.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::allocate::{DailyAllocator, DayPlan, MandatoryEvent};
use crate::catalog::ActivityCatalog;
use crate::error::{CoreError, Result};
use crate::schedule::Schedule;

/// The full challenge plan: one [`DayPlan`] per date, ascending, no gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub challenge_start: NaiveDate,
    pub challenge_end: NaiveDate,
    pub daily: Vec<DayPlan>,
}

impl Plan {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Assembles a [`Plan`] from the parsed inputs.
pub struct PlanBuilder {
    catalog: ActivityCatalog,
    cap: u32,
    reservations: BTreeMap<NaiveDate, Vec<MandatoryEvent>>,
    schedule: Option<Schedule>,
    allocator: DailyAllocator,
}

impl PlanBuilder {
    pub fn new(catalog: ActivityCatalog, cap: u32) -> Self {
        Self {
            catalog,
            cap,
            reservations: BTreeMap::new(),
            schedule: None,
            allocator: DailyAllocator::new(),
        }
    }

    /// Dated reservations, already classified and grouped.
    pub fn with_reservations(mut self, reservations: BTreeMap<NaiveDate, Vec<MandatoryEvent>>) -> Self {
        self.reservations = reservations;
        self
    }

    /// Recurring weekly schedule, consulted for dates without reservations.
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Resolve the challenge range: explicit request wins, then the
    /// schedule's boundaries.
    fn resolve_range(
        &self,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<(NaiveDate, NaiveDate)> {
        if let Some(range) = range {
            return Ok(range);
        }
        if let Some(schedule) = &self.schedule {
            if let (Some(start), Some(end)) = (schedule.challenge_start, schedule.challenge_end) {
                return Ok((start, end));
            }
        }
        Err(CoreError::MissingDateRange)
    }

    /// Build the plan over `range` (or the schedule boundaries).
    pub fn build(&self, range: Option<(NaiveDate, NaiveDate)>) -> Result<Plan> {
        let (start, end) = self.resolve_range(range)?;
        if end < start {
            return Err(CoreError::MissingDateRange);
        }

        let mut daily = Vec::new();
        let mut date = start;
        while date <= end {
            let mandatory = match self.reservations.get(&date) {
                Some(events) => events.clone(),
                None => self
                    .schedule
                    .as_ref()
                    .map(|s| s.events_on(date))
                    .unwrap_or_default(),
            };
            daily.push(self.allocator.allocate(date, &mandatory, &self.catalog, self.cap));
            date = date
                .checked_add_days(Days::new(1))
                .ok_or_else(|| CoreError::InvalidDate(date.to_string()))?;
        }

        Ok(Plan { challenge_start: start, challenge_end: end, daily })
    }
}

//! Daily point allocation.
//!
//! Given the mandatory events for a date and the daily cap, the allocator
//! decides which events count toward the cap (arrival order is the only
//! priority signal), injects the conditional bike-commute bonus, and fills
//! the remaining headroom from the activity catalog. Items that would push
//! the total past the cap are kept visible as extras, never dropped.
//!
//! Filler policy: if one candidate's points equal the remaining headroom
//! exactly, take the first such candidate; otherwise run an exact 0/1
//! subset-sum over `[0, remaining]` and accept the first-discovered maximal
//! combination in catalog order. `O(candidates × remaining)`.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::ActivityCatalog;

/// Reason attached to every extra.
pub const EXCEEDS_DAILY_CAP: &str = "exceeds_daily_cap";

/// A reservation or schedule occurrence to be considered for a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MandatoryEvent {
    pub name: String,
    pub time: Option<String>,
    pub duration_minutes: u32,
    pub points: u32,
    pub location: Option<String>,
}

/// One planned item of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub name: String,
    pub points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub recommended: bool,
}

/// A plan item that did not fit under the cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraItem {
    #[serde(flatten)]
    pub item: PlanItem,
    pub reason: String,
}

/// The allocation result for a single date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub items: Vec<PlanItem>,
    pub extras: Vec<ExtraItem>,
    pub total_points: u32,
}

/// Synthesized bike-commute bonus: 30-minute round trip.
pub const BIKE_COMMUTE_NAME: &str = "Bike commute (round trip 30 min)";
const BIKE_COMMUTE_MINUTES: u32 = 30;
const BIKE_COMMUTE_FALLBACK_POINTS: u32 = 2;

/// Daily allocator over a fixed catalog-independent pattern set.
pub struct DailyAllocator {
    filler: Regex,
    bonus_name: Regex,
    bonus_location: Regex,
}

impl DailyAllocator {
    pub fn new() -> Self {
        Self {
            filler: Regex::new(r"15-minute|30-minute|45-minute|walk|rehab|stretch").unwrap(),
            bonus_name: Regex::new(r"pickle|pb|gym|fitness|strength|cycle|yoga").unwrap(),
            bonus_location: Regex::new(r"fitness|court sports").unwrap(),
        }
    }

    /// Allocate one day: mandatory pass, conditional bonus, filler.
    pub fn allocate(
        &self,
        date: NaiveDate,
        mandatory: &[MandatoryEvent],
        catalog: &ActivityCatalog,
        cap: u32,
    ) -> DayPlan {
        let mut items: Vec<PlanItem> = Vec::new();
        let mut extras: Vec<ExtraItem> = Vec::new();
        let mut total: u32 = 0;

        // Mandatory pass: stable partition in arrival order.
        for event in mandatory {
            let item = PlanItem {
                name: event.name.clone(),
                points: event.points,
                time: event.time.clone(),
                duration_minutes: Some(event.duration_minutes),
                location: event.location.clone(),
                recommended: false,
            };
            if total + event.points <= cap {
                total += event.points;
                items.push(PlanItem { recommended: true, ..item });
            } else {
                extras.push(ExtraItem { item, reason: EXCEEDS_DAILY_CAP.into() });
            }
        }

        // Bike-commute bonus: triggered by the accepted set only.
        if items.iter().any(|it| self.is_bonus_trigger(it)) {
            let points = catalog
                .entries
                .iter()
                .find(|e| e.name.to_lowercase().contains("bike commute"))
                .map(|e| e.points)
                .unwrap_or(BIKE_COMMUTE_FALLBACK_POINTS);
            let bike = PlanItem {
                name: BIKE_COMMUTE_NAME.into(),
                points,
                time: None,
                duration_minutes: Some(BIKE_COMMUTE_MINUTES),
                location: None,
                recommended: false,
            };
            if total + points <= cap {
                total += points;
                items.push(PlanItem { recommended: true, ..bike });
            } else {
                extras.push(ExtraItem { item: bike, reason: EXCEEDS_DAILY_CAP.into() });
            }
        }

        // Filler: approach the cap from the catalog.
        let remaining = cap - total;
        if remaining > 0 {
            let candidates = self.filler_candidates(catalog, &items, &extras);
            for idx in select_filler(&candidates, remaining) {
                let entry = &catalog.entries[idx];
                total += entry.points;
                items.push(PlanItem {
                    name: entry.name.clone(),
                    points: entry.points,
                    time: None,
                    duration_minutes: None,
                    location: None,
                    recommended: true,
                });
            }
        }

        DayPlan { date, items, extras, total_points: total }
    }

    fn is_bonus_trigger(&self, item: &PlanItem) -> bool {
        self.bonus_name.is_match(&item.name.to_lowercase())
            || item
                .location
                .as_deref()
                .is_some_and(|loc| self.bonus_location.is_match(&loc.to_lowercase()))
    }

    /// Catalog indexes eligible as filler: entries matching the filler
    /// pattern (whole catalog when none do), minus names already planned,
    /// compared case-insensitively and exactly.
    fn filler_candidates(
        &self,
        catalog: &ActivityCatalog,
        items: &[PlanItem],
        extras: &[ExtraItem],
    ) -> Vec<(usize, u32)> {
        let mut indexes: Vec<usize> = catalog
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| self.filler.is_match(&e.name.to_lowercase()))
            .map(|(i, _)| i)
            .collect();
        if indexes.is_empty() {
            indexes = (0..catalog.entries.len()).collect();
        }

        let taken: Vec<String> = items
            .iter()
            .map(|it| it.name.to_lowercase())
            .chain(extras.iter().map(|ex| ex.item.name.to_lowercase()))
            .collect();

        indexes
            .into_iter()
            .filter(|&i| !taken.contains(&catalog.entries[i].name.to_lowercase()))
            .map(|i| (i, catalog.entries[i].points))
            .collect()
    }
}

impl Default for DailyAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the filler subset with the maximal total ≤ `remaining`.
///
/// Fast path: a single candidate whose points equal `remaining` is optimal
/// on its own, so the first such candidate wins. Otherwise an exact 0/1
/// subset-sum over `[0, remaining]`: sums are marked reachable in ascending
/// candidate order and never overwritten, so ties resolve to the
/// first-discovered combination. Returned indexes are ascending (catalog
/// order).
fn select_filler(candidates: &[(usize, u32)], remaining: u32) -> Vec<usize> {
    if let Some(&(idx, _)) = candidates.iter().find(|&&(_, p)| p == remaining) {
        return vec![idx];
    }

    let bound = remaining as usize;
    let mut reachable = vec![false; bound + 1];
    // For each newly reached sum, which candidate position closed it.
    let mut closed_by: Vec<Option<usize>> = vec![None; bound + 1];
    reachable[0] = true;

    for (pos, &(_, points)) in candidates.iter().enumerate() {
        let p = points as usize;
        if p == 0 || p > bound {
            continue;
        }
        for sum in (p..=bound).rev() {
            if !reachable[sum] && reachable[sum - p] {
                reachable[sum] = true;
                closed_by[sum] = Some(pos);
            }
        }
    }

    let best = (0..=bound).rev().find(|&s| reachable[s]).unwrap_or(0);
    let mut picked = Vec::new();
    let mut sum = best;
    while sum > 0 {
        let pos = closed_by[sum].expect("reachable sum has a closing candidate");
        picked.push(candidates[pos].0);
        sum -= candidates[pos].1 as usize;
    }
    picked.reverse();
    picked
}

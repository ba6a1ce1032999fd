//! TOML configuration: default file locations and an optional explicit
//! challenge range.
//!
//! Every field has a default, so a missing `fitplan.toml` is never an error
//! and components always receive explicit paths rather than reading ambient
//! globals. CLI flags override configured values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Input and output file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_activities")]
    pub activities: PathBuf,
    #[serde(default = "default_rules")]
    pub rules: PathBuf,
    #[serde(default = "default_reservations")]
    pub reservations: PathBuf,
    #[serde(default = "default_schedule")]
    pub schedule: PathBuf,
    #[serde(default = "default_plan")]
    pub plan: PathBuf,
    #[serde(default = "default_log")]
    pub log: PathBuf,
    #[serde(default = "default_ics")]
    pub ics: PathBuf,
}

fn default_activities() -> PathBuf {
    PathBuf::from("activities.txt")
}
fn default_rules() -> PathBuf {
    PathBuf::from("rules.txt")
}
fn default_reservations() -> PathBuf {
    PathBuf::from("reservations/active_reservations.json")
}
fn default_schedule() -> PathBuf {
    PathBuf::from("schedule.json")
}
fn default_plan() -> PathBuf {
    PathBuf::from("plan.json")
}
fn default_log() -> PathBuf {
    PathBuf::from("log.txt")
}
fn default_ics() -> PathBuf {
    PathBuf::from("docs/fitplan.ics")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            activities: default_activities(),
            rules: default_rules(),
            reservations: default_reservations(),
            schedule: default_schedule(),
            plan: default_plan(),
            log: default_log(),
            ics: default_ics(),
        }
    }
}

/// Application configuration, read from `fitplan.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    /// Explicit challenge range; overrides schedule boundaries when set.
    #[serde(default)]
    pub challenge_start: Option<NaiveDate>,
    #[serde(default)]
    pub challenge_end: Option<NaiveDate>,
    /// Daily cap override; when unset the cap comes from the rules document.
    #[serde(default)]
    pub daily_cap: Option<u32>,
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the
    /// file is missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => toml::from_str(&text).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// The configured range, when both ends are set.
    pub fn challenge_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.challenge_start, self.challenge_end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

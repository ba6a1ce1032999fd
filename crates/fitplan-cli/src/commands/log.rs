//! Progress log commands.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use std::path::PathBuf;

use fitplan_core::{logfile, Config, Schedule};

#[derive(Subcommand)]
pub enum LogAction {
    /// Append a dated entry template
    Add {
        /// Config file with default paths
        #[arg(long, default_value = "fitplan.toml")]
        config: PathBuf,
        /// Entry date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Log file path
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Append prefilled blocks for future dates from the schedule
    Materialize {
        /// Config file with default paths
        #[arg(long, default_value = "fitplan.toml")]
        config: PathBuf,
        /// Range start (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Range end (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        /// Recurring schedule JSON
        #[arg(long)]
        schedule: Option<PathBuf>,
        /// Log file path
        #[arg(long)]
        log: Option<PathBuf>,
    },
}

pub fn run(action: LogAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        LogAction::Add { config, date, log } => {
            let config = Config::load_or_default(&config);
            let log = log.unwrap_or_else(|| config.paths.log.clone());
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            logfile::append_entry(&log, date)?;
            println!("Appended entry for {} to {}", date, log.display());
        }
        LogAction::Materialize { config, start, end, schedule, log } => {
            let config = Config::load_or_default(&config);
            let log = log.unwrap_or_else(|| config.paths.log.clone());
            let schedule_path = schedule.unwrap_or_else(|| config.paths.schedule.clone());
            let schedule = Schedule::load(&schedule_path)?;

            let today = Local::now().date_naive();
            let added = logfile::materialize(&log, &schedule, start, end, today)?;
            if added.is_empty() {
                println!("No new future dates to materialize");
            } else {
                println!("Appended {} future dated blocks to {}", added.len(), log.display());
            }
        }
    }
    Ok(())
}

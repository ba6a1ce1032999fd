//! Plan generation and inspection commands.

use chrono::NaiveDate;
use clap::Subcommand;
use std::path::PathBuf;

use fitplan_core::{
    load_daily_cap, ActivityCatalog, Config, EventClassifier, Plan, PlanBuilder, ReservationList,
    Schedule,
};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Build the plan and write it as JSON
    Generate {
        /// Config file with default paths
        #[arg(long, default_value = "fitplan.toml")]
        config: PathBuf,
        /// Activity catalog document
        #[arg(long)]
        activities: Option<PathBuf>,
        /// Rules document (daily cap)
        #[arg(long)]
        rules: Option<PathBuf>,
        /// Reservation list JSON
        #[arg(long)]
        reservations: Option<PathBuf>,
        /// Recurring schedule JSON
        #[arg(long)]
        schedule: Option<PathBuf>,
        /// Challenge start (YYYY-MM-DD); requires --end
        #[arg(long, requires = "end")]
        start: Option<NaiveDate>,
        /// Challenge end (YYYY-MM-DD); requires --start
        #[arg(long, requires = "start")]
        end: Option<NaiveDate>,
        /// Output path for plan.json
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print per-day totals of an existing plan
    Show {
        /// Plan JSON path
        #[arg(long, default_value = "plan.json")]
        plan: PathBuf,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Generate {
            config,
            activities,
            rules,
            reservations,
            schedule,
            start,
            end,
            out,
        } => {
            let config = Config::load_or_default(&config);
            let activities = activities.unwrap_or_else(|| config.paths.activities.clone());
            let rules = rules.unwrap_or_else(|| config.paths.rules.clone());
            let reservations = reservations.unwrap_or_else(|| config.paths.reservations.clone());
            // An explicitly requested schedule must load; the configured
            // default is best-effort.
            let schedule_explicit = schedule.is_some();
            let schedule = schedule.unwrap_or_else(|| config.paths.schedule.clone());
            let out = out.unwrap_or_else(|| config.paths.plan.clone());

            let catalog = ActivityCatalog::load(&activities);
            if catalog.is_empty() {
                println!("note: no activity catalog at {} (filler disabled)", activities.display());
            }
            let cap = config.daily_cap.unwrap_or_else(|| load_daily_cap(&rules));
            let grouped =
                ReservationList::load(&reservations).by_date(&EventClassifier::new(), &catalog);

            let mut builder = PlanBuilder::new(catalog, cap).with_reservations(grouped);
            match Schedule::load(&schedule) {
                Ok(schedule) => builder = builder.with_schedule(schedule),
                Err(e) if schedule_explicit => return Err(e.into()),
                Err(_) => {}
            }

            let range = match (start, end) {
                (Some(start), Some(end)) => Some((start, end)),
                _ => config.challenge_range(),
            };
            let plan = builder.build(range)?;

            if let Some(parent) = out.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&out, plan.to_json_pretty()?)?;
            println!(
                "Wrote {} ({} days, cap {})",
                out.display(),
                plan.daily.len(),
                cap
            );
        }
        PlanAction::Show { plan } => {
            let text = std::fs::read_to_string(&plan)?;
            let plan: Plan = serde_json::from_str(&text)?;
            println!("{} .. {}", plan.challenge_start, plan.challenge_end);
            for day in &plan.daily {
                let extras = if day.extras.is_empty() {
                    String::new()
                } else {
                    format!(" ({} over cap)", day.extras.len())
                };
                println!("{}  {:>2} pts  {} items{}", day.date, day.total_points, day.items.len(), extras);
            }
        }
    }
    Ok(())
}

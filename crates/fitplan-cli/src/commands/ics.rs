//! Calendar export commands.

use clap::Subcommand;
use std::path::PathBuf;

use fitplan_core::{plan_to_ics, Config, Plan};

#[derive(Subcommand)]
pub enum IcsAction {
    /// Serialize a computed plan to an .ics file
    Export {
        /// Config file with default paths
        #[arg(long, default_value = "fitplan.toml")]
        config: PathBuf,
        /// Plan JSON path
        #[arg(long)]
        plan: Option<PathBuf>,
        /// Output .ics path
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

pub fn run(action: IcsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        IcsAction::Export { config, plan, out } => {
            let config = Config::load_or_default(&config);
            let plan_path = plan.unwrap_or_else(|| config.paths.plan.clone());
            let out = out.unwrap_or_else(|| config.paths.ics.clone());

            let text = std::fs::read_to_string(&plan_path)?;
            let plan: Plan = serde_json::from_str(&text)?;

            if let Some(parent) = out.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&out, plan_to_ics(&plan))?;
            println!("Wrote {}", out.display());
        }
    }
    Ok(())
}

//! Activity catalog commands.

use clap::Subcommand;
use std::path::PathBuf;

use fitplan_core::{ActivityCatalog, Config};

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List parsed catalog entries
    List {
        /// Config file with default paths
        #[arg(long, default_value = "fitplan.toml")]
        config: PathBuf,
        /// Activity catalog document
        #[arg(long)]
        activities: Option<PathBuf>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CatalogAction::List { config, activities, json } => {
            let config = Config::load_or_default(&config);
            let activities = activities.unwrap_or_else(|| config.paths.activities.clone());
            let catalog = ActivityCatalog::load(&activities);

            if json {
                println!("{}", serde_json::to_string_pretty(&catalog.entries)?);
            } else if catalog.is_empty() {
                println!("no activities parsed from {}", activities.display());
            } else {
                for entry in &catalog.entries {
                    println!("{:>3} pt  {}", entry.points, entry.name);
                }
            }
        }
    }
    Ok(())
}

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "fitplan-cli", version, about = "Fitplan CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan generation and inspection
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Calendar export
    Ics {
        #[command(subcommand)]
        action: commands::ics::IcsAction,
    },
    /// Progress log management
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
    /// Activity catalog inspection
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Ics { action } => commands::ics::run(action),
        Commands::Log { action } => commands::log::run(action),
        Commands::Catalog { action } => commands::catalog::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

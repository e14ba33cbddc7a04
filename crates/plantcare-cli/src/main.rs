use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "plantcare", version, about = "Plant care scheduling CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the species catalog
    Species {
        #[command(subcommand)]
        action: commands::species::SpeciesAction,
    },
    /// Apartment management
    Apartment {
        #[command(subcommand)]
        action: commands::apartment::ApartmentAction,
    },
    /// Room management
    Room {
        #[command(subcommand)]
        action: commands::room::RoomAction,
    },
    /// Plant management
    Plant {
        #[command(subcommand)]
        action: commands::plant::PlantAction,
    },
    /// Log care and view history
    Care {
        #[command(subcommand)]
        action: commands::care::CareCommand,
    },
    /// Show what needs watering or fertilizing
    Reminders(commands::reminders::RemindersArgs),
    /// Vacation plans and helpers
    Vacation {
        #[command(subcommand)]
        action: commands::vacation::VacationAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    // Logs go to stderr so JSON on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PLANTCARE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Species { action } => commands::species::run(action),
        Commands::Apartment { action } => commands::apartment::run(action),
        Commands::Room { action } => commands::room::run(action),
        Commands::Plant { action } => commands::plant::run(action),
        Commands::Care { action } => commands::care::run(action),
        Commands::Reminders(args) => commands::reminders::run(args),
        Commands::Vacation { action } => commands::vacation::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

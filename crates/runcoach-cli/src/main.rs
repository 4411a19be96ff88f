use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "runcoach", version, about = "Running performance coach CLI")]
struct Cli {
    #[command(flatten)]
    athlete: commands::AthleteArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and format durations
    Time {
        #[command(subcommand)]
        action: commands::time::TimeAction,
    },
    /// Stateless performance calculations
    Calc {
        #[command(subcommand)]
        action: commands::calc::CalcAction,
    },
    /// Personal records and leaderboards
    Record {
        #[command(subcommand)]
        action: commands::record::RecordAction,
    },
    /// Athlete profile
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Training log
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
    /// Suggest a training session
    Workout(commands::workout::WorkoutArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("RUNCOACH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let athlete = cli.athlete;
    let result = match cli.command {
        Commands::Time { action } => commands::time::run(action),
        Commands::Calc { action } => commands::calc::run(action),
        Commands::Record { action } => commands::record::run(&athlete, action),
        Commands::Profile { action } => commands::profile::run(&athlete, action),
        Commands::Log { action } => commands::log::run(&athlete, action),
        Commands::Workout(args) => commands::workout::run(&athlete, args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        tracing::debug!("command failed: {e:?}");
        eprintln!("error: {}", commands::user_message(e.as_ref()));
        std::process::exit(1);
    }
}

use chrono::{Datelike, Local};
use clap::Args;
use runcoach_core::{suggest_workout, SessionKind};

use super::{print_json, AthleteArgs, CommandResult, Session};

#[derive(Args)]
pub struct WorkoutArgs {
    /// recovery, endurance, tempo, intervals or long_run (random when omitted)
    #[arg(long)]
    kind: Option<SessionKind>,
    /// Seed for the draw (defaults to one per athlete per day)
    #[arg(long)]
    seed: Option<u64>,
    /// MAS in km/h (defaults to the stored profile value)
    #[arg(long)]
    mas: Option<f64>,
    #[arg(long)]
    json: bool,
}

pub fn run(athlete: &AthleteArgs, args: WorkoutArgs) -> CommandResult {
    let session = Session::open(athlete)?;
    let mas = match args.mas {
        Some(mas) => mas,
        None => session.coach.pace_table(session.user_id)?.0,
    };
    let seed = args.seed.unwrap_or_else(|| {
        let today = Local::now().date_naive();
        (session.user_id.0 as u64).wrapping_mul(1_000_003) ^ today.num_days_from_ce() as u64
    });

    let suggestion = suggest_workout(mas, args.kind, seed)?;
    if args.json {
        return print_json(&suggestion);
    }
    println!("{} ({})", suggestion.title, suggestion.kind);
    println!("  {}", suggestion.description);
    Ok(())
}

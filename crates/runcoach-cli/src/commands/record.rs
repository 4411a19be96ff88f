use clap::Subcommand;
use runcoach_core::time_codec::{format_time, parse_time};
use runcoach_core::DistanceClass;

use super::{print_json, AthleteArgs, CommandResult, Session};

#[derive(Subcommand)]
pub enum RecordAction {
    /// Save a personal record, replacing the previous one for that distance
    Set {
        /// Distance class: 5k, 10k, semi or marathon
        distance: DistanceClass,
        /// Race time, e.g. 19:45 or 1:32:10
        time: String,
        #[arg(long)]
        json: bool,
    },
    /// Fastest athletes over a distance
    Leaderboard {
        #[arg(default_value = "5k")]
        distance: DistanceClass,
        /// Number of entries (defaults to config `leaderboard.default_limit`)
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
}

fn medal(rank: usize) -> String {
    match rank {
        1 => "gold".to_string(),
        2 => "silver".to_string(),
        3 => "bronze".to_string(),
        n => format!("{n}."),
    }
}

pub fn run(athlete: &AthleteArgs, action: RecordAction) -> CommandResult {
    let mut session = Session::open(athlete)?;

    match action {
        RecordAction::Set {
            distance,
            time,
            json,
        } => {
            let seconds = parse_time(&time)?;
            let outcome = session.coach.upsert_race_record(
                session.user_id,
                &session.display_name,
                distance,
                seconds,
            )?;
            if json {
                return print_json(&outcome);
            }
            println!(
                "Record saved: {} in {}",
                outcome.record.distance,
                format_time(outcome.record.time_seconds)
            );
            match (outcome.estimated_mas, outcome.mas_updated) {
                (Some(mas), true) => println!("MAS updated: {mas:.1} km/h"),
                (Some(mas), false) => {
                    println!("Estimated MAS {mas:.1} km/h is implausible, profile left unchanged")
                }
                _ => {}
            }
        }
        RecordAction::Leaderboard {
            distance,
            limit,
            json,
        } => {
            let limit = limit.unwrap_or(session.config.leaderboard.default_limit);
            let board = session.coach.leaderboard(distance, limit)?;
            if json {
                return print_json(&board);
            }
            if board.is_empty() {
                println!("No {distance} records yet.");
                return Ok(());
            }
            println!("Leaderboard {distance}");
            for entry in board {
                println!(
                    "  {:<7} {} - {}",
                    medal(entry.rank),
                    entry.display_name,
                    format_time(entry.time_seconds)
                );
            }
        }
    }
    Ok(())
}

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use runcoach_core::time_codec::{format_pace, format_time, parse_time};

use super::{print_json, AthleteArgs, CommandResult, Session};

#[derive(Subcommand)]
pub enum LogAction {
    /// Append a training session
    Add {
        distance_km: f64,
        /// Session duration, e.g. 45:00
        time: String,
        /// Free-form comment
        #[arg(trailing_var_arg = true)]
        comment: Vec<String>,
        /// Session date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show the latest sessions, oldest first
    Recent {
        #[arg(default_value_t = 5)]
        count: usize,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(athlete: &AthleteArgs, action: LogAction) -> CommandResult {
    let mut session = Session::open(athlete)?;
    let user_id = session.user_id;

    match action {
        LogAction::Add {
            distance_km,
            time,
            comment,
            date,
        } => {
            let seconds = parse_time(&time)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let entry = session.coach.append_log_entry(
                user_id,
                date,
                distance_km,
                seconds,
                &comment.join(" "),
            )?;
            println!(
                "Logged {} km in {} on {}",
                entry.distance_km,
                format_time(entry.duration_seconds),
                entry.date
            );
        }
        LogAction::Recent { count, json } => {
            let entries = session.coach.recent_log_entries(user_id, count)?;
            if json {
                return print_json(&entries);
            }
            if entries.is_empty() {
                println!("Training log is empty.");
                return Ok(());
            }
            for entry in entries {
                let pace = if entry.distance_km > 0.0 {
                    format!(
                        " ({}/km)",
                        format_pace(f64::from(entry.duration_seconds) / entry.distance_km)
                    )
                } else {
                    String::new()
                };
                println!(
                    "{}  {} km  {}{}  {}",
                    entry.date,
                    entry.distance_km,
                    format_time(entry.duration_seconds),
                    pace,
                    entry.comment
                );
            }
        }
    }
    Ok(())
}

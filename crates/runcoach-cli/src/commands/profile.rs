use clap::Subcommand;
use runcoach_core::time_codec::{format_optional, format_pace};
use runcoach_core::{DistanceClass, PhysioField};

use super::{print_json, AthleteArgs, CommandResult, Session};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show physiological values and personal records
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Set a physiological value
    Set {
        /// fcm (max HR), fcr (rest HR) or vma (MAS, km/h)
        field: PhysioField,
        value: f64,
    },
    /// Training paces from the stored MAS
    Paces {
        #[arg(long)]
        json: bool,
    },
    /// Heart-rate zones from the stored max and rest heart rate
    Zones {
        #[arg(long)]
        json: bool,
    },
}

fn show_value(value: Option<impl std::fmt::Display>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v}{unit}"),
        None => "not set".to_string(),
    }
}

pub fn run(athlete: &AthleteArgs, action: ProfileAction) -> CommandResult {
    let mut session = Session::open(athlete)?;
    let user_id = session.user_id;

    match action {
        ProfileAction::Show { json } => {
            let card = session.coach.athlete_card(user_id)?;
            if json {
                return print_json(&card);
            }
            let Some(card) = card else {
                println!("No profile yet for athlete {user_id}.");
                return Ok(());
            };
            if let Some(profile) = &card.profile {
                println!("Athlete: {} ({user_id})", profile.display_name);
                println!(
                    "  MAS: {}",
                    show_value(
                        profile.maximal_aerobic_speed.map(|v| format!("{v:.1}")),
                        " km/h"
                    )
                );
                println!("  Max HR: {}", show_value(profile.max_heart_rate, " bpm"));
                println!("  Rest HR: {}", show_value(profile.rest_heart_rate, " bpm"));
            }
            println!("Records:");
            for distance in DistanceClass::ALL {
                let record = card.records.iter().find(|r| r.distance == distance);
                let time = format_optional(record.map(|r| r.time_seconds));
                match record {
                    Some(r) => {
                        println!("  {:<9} {time} ({})", distance.to_string(), r.recorded_on)
                    }
                    None => println!("  {:<9} {time}", distance.to_string()),
                }
            }
        }
        ProfileAction::Set { field, value } => {
            let profile = session.coach.set_physiological_field(
                user_id,
                &session.display_name,
                field,
                value,
            )?;
            let stored = show_value(profile.get(field), "");
            println!("{} set to {stored}", field.label());
        }
        ProfileAction::Paces { json } => {
            let (mas, table) = session.coach.pace_table(user_id)?;
            if json {
                return print_json(&table);
            }
            println!("Paces for MAS {mas:.1} km/h");
            for zone in table {
                println!("  {} ({}): {}/km", zone.label, zone.range, zone.pace);
            }
            let threshold = session.coach.threshold_pace(user_id)?;
            println!(
                "  Threshold ({}%): {}/km",
                session.coach.coefficients().threshold_percent,
                format_pace(threshold)
            );
        }
        ProfileAction::Zones { json } => {
            let zones = session.coach.heart_rate_zones(user_id)?;
            if json {
                return print_json(&zones);
            }
            for zone in zones {
                println!("  {}: {} - {} bpm", zone.label, zone.low_bpm, zone.high_bpm);
            }
        }
    }
    Ok(())
}

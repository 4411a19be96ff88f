//! Calculations that need no stored profile.

use clap::Subcommand;
use runcoach_core::performance::{
    estimate_mas_from_race, estimate_vo2_from_five_k, heart_rate_reserve_zones, pace_zone_table,
    riegel_predict_with_exponent, threshold_pace_with,
};
use runcoach_core::time_codec::{format_pace, format_time, parse_time};
use runcoach_core::Config;

use super::{print_json, CommandResult};

#[derive(Subcommand)]
pub enum CalcAction {
    /// Estimate MAS (km/h) from a race result
    Mas {
        /// Race distance in km (5, 10, 21.1 and 42.195 are tabulated)
        distance_km: f64,
        /// Race time, e.g. 20:00
        time: String,
    },
    /// Estimate VO2max from a 5 km time
    Vo2 {
        time: String,
    },
    /// Predict a race time over another distance (Riegel)
    Riegel {
        /// Known race time
        time: String,
        /// Distance of the known race, km
        from_km: f64,
        /// Target distance, km
        to_km: f64,
        /// Fatigue exponent (defaults to config `coefficients.riegel_exponent`)
        #[arg(long)]
        exponent: Option<f64>,
    },
    /// Threshold pace for a MAS (km/h)
    Threshold {
        mas: f64,
    },
    /// Training pace table for a MAS (km/h)
    Paces {
        mas: f64,
        #[arg(long)]
        json: bool,
    },
    /// Heart-rate reserve zones
    Zones {
        max_hr: u16,
        rest_hr: u16,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CalcAction) -> CommandResult {
    let config = Config::load_or_default();

    match action {
        CalcAction::Mas { distance_km, time } => {
            let seconds = parse_time(&time)?;
            let mas = estimate_mas_from_race(distance_km, seconds)?;
            println!("{mas:.1} km/h");
        }
        CalcAction::Vo2 { time } => {
            let seconds = parse_time(&time)?;
            let vo2 = estimate_vo2_from_five_k(seconds)?;
            println!("{vo2:.1} ml/kg/min");
        }
        CalcAction::Riegel {
            time,
            from_km,
            to_km,
            exponent,
        } => {
            let seconds = parse_time(&time)?;
            let exponent = exponent.unwrap_or(config.coefficients.riegel_exponent);
            let predicted =
                riegel_predict_with_exponent(f64::from(seconds), from_km, to_km, exponent)?;
            println!("{}", format_time(predicted as u32));
        }
        CalcAction::Threshold { mas } => {
            let pace = threshold_pace_with(mas, &config.coefficients)?;
            println!(
                "{}/km ({}% of MAS)",
                format_pace(pace),
                config.coefficients.threshold_percent
            );
        }
        CalcAction::Paces { mas, json } => {
            let table = pace_zone_table(mas)?;
            if json {
                return print_json(&table);
            }
            println!("Paces for MAS {mas:.1} km/h");
            for zone in table {
                println!("  {} ({}): {}/km", zone.label, zone.range, zone.pace);
            }
        }
        CalcAction::Zones {
            max_hr,
            rest_hr,
            json,
        } => {
            let zones = heart_rate_reserve_zones(max_hr, rest_hr)?;
            if json {
                return print_json(&zones);
            }
            println!("Max HR: {max_hr} | Rest HR: {rest_hr}");
            for zone in zones {
                println!("  {}: {} - {} bpm", zone.label, zone.low_bpm, zone.high_bpm);
            }
        }
    }
    Ok(())
}

//! Maximal aerobic speed (MAS, also VMA) estimation and pace conversion.

use crate::error::ValidationError;

use super::coefficients::{Coefficients, THRESHOLD_PERCENT};

/// Fraction of MAS sustained over each reference race distance, in km.
///
/// Distances outside this table fall back to the raw average speed.
const SUSTAINED_FRACTIONS: [(f64, f64); 4] = [
    (5.0, 0.92),
    (10.0, 0.85),
    (21.1, 0.78),
    (42.195, 0.70),
];

const DISTANCE_EPSILON: f64 = 1e-9;

/// Fraction of MAS an athlete sustains over `distance_km`, if tabulated.
pub fn sustained_fraction(distance_km: f64) -> Option<f64> {
    SUSTAINED_FRACTIONS
        .iter()
        .find(|(d, _)| (d - distance_km).abs() < DISTANCE_EPSILON)
        .map(|(_, fraction)| *fraction)
}

/// Estimate MAS in km/h from a race result.
///
/// The race's average speed is divided by the fraction of MAS sustained over
/// that distance. Untabulated distances return the average speed unscaled.
pub fn estimate_mas_from_race(distance_km: f64, time_seconds: u32) -> Result<f64, ValidationError> {
    if !distance_km.is_finite() || distance_km <= 0.0 {
        return Err(ValidationError::InvalidDistance(format!(
            "race distance must be positive, got {distance_km} km"
        )));
    }
    if time_seconds == 0 {
        return Err(ValidationError::ImplausibleDuration {
            seconds: 0,
            min: 1,
            max: crate::time_codec::MAX_DURATION_SECS,
        });
    }

    let speed_kmh = distance_km / (f64::from(time_seconds) / 3600.0);
    Ok(match sustained_fraction(distance_km) {
        Some(fraction) => speed_kmh / fraction,
        None => speed_kmh,
    })
}

/// Seconds per kilometre when running at `percentage` percent of `mas`.
pub fn pace_from_mas(mas: f64, percentage: f64) -> Result<f64, ValidationError> {
    let target_speed = mas * percentage / 100.0;
    if !target_speed.is_finite() || target_speed <= 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "target speed".to_string(),
            value: target_speed,
            min: 0.0,
            max: f64::INFINITY,
        });
    }
    Ok(3600.0 / target_speed)
}

/// Threshold pace at the canonical 89% of MAS.
pub fn threshold_pace_from_mas(mas: f64) -> Result<f64, ValidationError> {
    pace_from_mas(mas, THRESHOLD_PERCENT)
}

pub fn threshold_pace_with(mas: f64, coefficients: &Coefficients) -> Result<f64, ValidationError> {
    pace_from_mas(mas, coefficients.threshold_percent)
}

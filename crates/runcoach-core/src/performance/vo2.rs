//! VO2max estimation from race speed.

use crate::error::ValidationError;

const FIVE_K_METERS: f64 = 5000.0;

/// Oxygen cost in ml/kg/min of running at `m_per_min` metres per minute.
///
/// `-4.60 + 0.182258 v + 0.000104 v²`
pub fn vo2_from_speed(m_per_min: f64) -> f64 {
    -4.60 + 0.182258 * m_per_min + 0.000104 * m_per_min * m_per_min
}

/// Estimate VO2max (ml/kg/min) from a 5 km race time.
pub fn estimate_vo2_from_five_k(time_seconds: u32) -> Result<f64, ValidationError> {
    if time_seconds == 0 {
        return Err(ValidationError::ImplausibleDuration {
            seconds: 0,
            min: 1,
            max: crate::time_codec::MAX_DURATION_SECS,
        });
    }
    let speed = FIVE_K_METERS / f64::from(time_seconds) * 60.0;
    Ok(vo2_from_speed(speed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_minute_five_k() {
        let vo2 = estimate_vo2_from_five_k(1200).unwrap();
        assert!((vo2 - 47.4645).abs() < 1e-6);
    }

    #[test]
    fn faster_is_higher() {
        let slow = estimate_vo2_from_five_k(1800).unwrap();
        let fast = estimate_vo2_from_five_k(1000).unwrap();
        assert!(fast > slow);
    }

    #[test]
    fn zero_time_rejected() {
        assert!(estimate_vo2_from_five_k(0).is_err());
    }
}

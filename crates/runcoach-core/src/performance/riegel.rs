//! Riegel cross-distance time prediction: `t2 = t1 * (d2 / d1)^k`.
//!
//! Extrapolation to any positive distance is allowed; accuracy degrades far
//! from the source distance.

use crate::error::ValidationError;

/// Standard Riegel fatigue exponent.
pub const RIEGEL_EXPONENT: f64 = 1.06;

pub fn riegel_predict(t1: f64, d1: f64, d2: f64) -> Result<f64, ValidationError> {
    riegel_predict_with_exponent(t1, d1, d2, RIEGEL_EXPONENT)
}

/// Predict the time over `d2` from a time `t1` over `d1` (same distance unit).
pub fn riegel_predict_with_exponent(
    t1: f64,
    d1: f64,
    d2: f64,
    exponent: f64,
) -> Result<f64, ValidationError> {
    for (name, d) in [("source", d1), ("target", d2)] {
        if !d.is_finite() || d <= 0.0 {
            return Err(ValidationError::InvalidDistance(format!(
                "{name} distance must be positive, got {d}"
            )));
        }
    }
    if !t1.is_finite() || t1 <= 0.0 {
        return Err(ValidationError::ImplausibleDuration {
            seconds: t1 as i64,
            min: 1,
            max: crate::time_codec::MAX_DURATION_SECS,
        });
    }
    Ok(t1 * (d2 / d1).powf(exponent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_to_ten() {
        let t2 = riegel_predict(1200.0, 5.0, 10.0).unwrap();
        assert!((t2 - 1200.0 * 2f64.powf(1.06)).abs() < 1e-9);
        assert!((t2 - 2501.9).abs() < 0.1);
    }

    #[test]
    fn same_distance_is_identity() {
        assert!((riegel_predict(1500.0, 5.0, 5.0).unwrap() - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn shorter_target_is_faster() {
        assert!(riegel_predict(3000.0, 10.0, 5.0).unwrap() < 1500.0);
    }

    #[test]
    fn custom_exponent() {
        let linear = riegel_predict_with_exponent(1200.0, 5.0, 10.0, 1.0).unwrap();
        assert!((linear - 2400.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_distances() {
        assert!(matches!(
            riegel_predict(1200.0, 0.0, 10.0),
            Err(ValidationError::InvalidDistance(_))
        ));
        assert!(matches!(
            riegel_predict(1200.0, 5.0, -1.0),
            Err(ValidationError::InvalidDistance(_))
        ));
        assert!(matches!(
            riegel_predict(0.0, 5.0, 10.0),
            Err(ValidationError::ImplausibleDuration { .. })
        ));
    }
}

//! Tunable model coefficients.
//!
//! Two threshold coefficients circulate for the same sessions: 89% of MAS
//! (canonical) and 90% (the `Threshold (1h)` row of the pace table). The
//! threshold pace uses whatever is configured here; the pace table keeps its
//! own fixed rows.

use serde::{Deserialize, Serialize};

use super::riegel::RIEGEL_EXPONENT;

/// Canonical threshold coefficient, in percent of MAS.
pub const THRESHOLD_PERCENT: f64 = 89.0;

/// Threshold coefficient used by the pace table, in percent of MAS.
pub const TABLE_THRESHOLD_PERCENT: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    /// Percentage of MAS held at threshold (one-hour) effort.
    #[serde(default = "default_threshold_percent")]
    pub threshold_percent: f64,
    /// Fatigue exponent for Riegel predictions.
    #[serde(default = "default_riegel_exponent")]
    pub riegel_exponent: f64,
}

fn default_threshold_percent() -> f64 {
    THRESHOLD_PERCENT
}

fn default_riegel_exponent() -> f64 {
    RIEGEL_EXPONENT
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            threshold_percent: THRESHOLD_PERCENT,
            riegel_exponent: RIEGEL_EXPONENT,
        }
    }
}

impl Coefficients {
    /// Coefficients matching the pace table's 90% threshold row.
    pub fn table_aligned() -> Self {
        Self {
            threshold_percent: TABLE_THRESHOLD_PERCENT,
            ..Self::default()
        }
    }
}

//! Running performance model.
//!
//! Pure, deterministic formulas over race results and physiological inputs:
//!
//! - **MAS** (maximal aerobic speed, VMA) estimated from a race result
//! - **VO2max** estimated from a 5 km time
//! - **Riegel** cross-distance time prediction
//! - **Zones**: pace table from MAS and heart-rate reserve (Karvonen) bands
//!
//! None of these functions touch storage.

pub mod coefficients;
pub mod mas;
pub mod riegel;
pub mod vo2;
pub mod zones;

pub use coefficients::Coefficients;
pub use mas::{
    estimate_mas_from_race, pace_from_mas, sustained_fraction, threshold_pace_from_mas,
    threshold_pace_with,
};
pub use riegel::{riegel_predict, riegel_predict_with_exponent, RIEGEL_EXPONENT};
pub use vo2::{estimate_vo2_from_five_k, vo2_from_speed};
pub use zones::{heart_rate_reserve_zones, pace_zone_table, HeartRateZone, PaceZone};

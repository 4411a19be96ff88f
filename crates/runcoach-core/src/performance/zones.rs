//! Training zones: pace table from MAS and heart-rate reserve bands.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time_codec::format_pace;

use super::mas::pace_from_mas;

/// A heart-rate band derived from the heart-rate reserve (Karvonen).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateZone {
    /// Zone number (1-5)
    pub zone: u8,
    pub label: String,
    pub low_bpm: u16,
    pub high_bpm: u16,
}

/// One row of the pace table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceZone {
    pub label: String,
    /// Effort range as displayed, e.g. `"70-75%"`
    pub range: String,
    /// Percentage of MAS the pace is computed at
    pub percentage: f64,
    pub seconds_per_km: f64,
    /// Pace rendered as `m:ss`
    pub pace: String,
}

/// (label, low %, high %) of heart-rate reserve.
const HR_BANDS: [(&str, u32, u32); 5] = [
    ("Zone 1 (Recovery)", 50, 60),
    ("Zone 2 (Endurance)", 60, 70),
    ("Zone 3 (Tempo)", 70, 80),
    ("Zone 4 (Threshold)", 80, 90),
    ("Zone 5 (Max)", 90, 100),
];

/// (label, displayed range, % of MAS) ordered from easiest to hardest.
const PACE_ROWS: [(&str, &str, f64); 6] = [
    ("Recovery jog", "60-65%", 65.0),
    ("Endurance", "70-75%", 70.0),
    ("Marathon pace", "80-82%", 80.0),
    ("Half-marathon pace", "85-88%", 85.0),
    ("Threshold (1h)", "90%", 90.0),
    ("Short MAS intervals", "105%", 105.0),
];

/// Five heart-rate reserve bands, each `rest + reserve * fraction`
/// truncated to whole bpm.
///
/// # Errors
/// [`ValidationError::OutOfRange`] unless `max_hr > rest_hr > 0`.
pub fn heart_rate_reserve_zones(
    max_hr: u16,
    rest_hr: u16,
) -> Result<Vec<HeartRateZone>, ValidationError> {
    if rest_hr == 0 {
        return Err(ValidationError::OutOfRange {
            field: "rest heart rate".to_string(),
            value: f64::from(rest_hr),
            min: 1.0,
            max: f64::from(max_hr.saturating_sub(1)),
        });
    }
    if max_hr <= rest_hr {
        return Err(ValidationError::OutOfRange {
            field: "max heart rate".to_string(),
            value: f64::from(max_hr),
            min: f64::from(rest_hr) + 1.0,
            max: f64::from(u16::MAX),
        });
    }

    let rest = u32::from(rest_hr);
    let reserve = u32::from(max_hr - rest_hr);
    let bpm = |percent: u32| (rest + reserve * percent / 100) as u16;

    Ok(HR_BANDS
        .iter()
        .enumerate()
        .map(|(i, (label, low, high))| HeartRateZone {
            zone: i as u8 + 1,
            label: (*label).to_string(),
            low_bpm: bpm(*low),
            high_bpm: bpm(*high),
        })
        .collect())
}

/// Training paces for each effort level of the pace table.
pub fn pace_zone_table(mas: f64) -> Result<Vec<PaceZone>, ValidationError> {
    PACE_ROWS
        .iter()
        .map(|(label, range, percentage)| {
            let seconds_per_km = pace_from_mas(mas, *percentage)?;
            Ok(PaceZone {
                label: (*label).to_string(),
                range: (*range).to_string(),
                percentage: *percentage,
                seconds_per_km,
                pace: format_pace(seconds_per_km),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn karvonen_bands() {
        let zones = heart_rate_reserve_zones(190, 50).unwrap();
        assert_eq!(zones.len(), 5);
        assert_eq!((zones[0].low_bpm, zones[0].high_bpm), (120, 134));
        assert_eq!(zones[2].label, "Zone 3 (Tempo)");
        assert_eq!((zones[2].low_bpm, zones[2].high_bpm), (148, 162));
        assert_eq!((zones[4].low_bpm, zones[4].high_bpm), (176, 190));
    }

    #[test]
    fn bands_are_contiguous() {
        let zones = heart_rate_reserve_zones(201, 47).unwrap();
        for pair in zones.windows(2) {
            assert_eq!(pair[0].high_bpm, pair[1].low_bpm);
        }
    }

    #[test]
    fn truncates_fractional_bpm() {
        // reserve 135: 50% = 67.5 -> 67
        let zones = heart_rate_reserve_zones(185, 50).unwrap();
        assert_eq!(zones[0].low_bpm, 117);
    }

    #[test]
    fn rejects_inverted_rates() {
        assert!(heart_rate_reserve_zones(50, 190).is_err());
        assert!(heart_rate_reserve_zones(150, 150).is_err());
        assert!(heart_rate_reserve_zones(190, 0).is_err());
    }

    #[test]
    fn pace_table_for_sixteen_kmh() {
        let table = pace_zone_table(16.0).unwrap();
        let labels: Vec<_> = table.iter().map(|z| z.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Recovery jog",
                "Endurance",
                "Marathon pace",
                "Half-marathon pace",
                "Threshold (1h)",
                "Short MAS intervals"
            ]
        );
        // 80% of 16 km/h = 12.8 km/h = 281.25 s/km
        assert_eq!(table[2].pace, "4:41");
        // 105% of 16 km/h = 16.8 km/h = 214.28 s/km
        assert_eq!(table[5].pace, "3:34");
        assert!(table.windows(2).all(|w| w[0].seconds_per_km > w[1].seconds_per_km));
    }

    #[test]
    fn pace_table_needs_positive_mas() {
        assert!(pace_zone_table(0.0).is_err());
    }
}

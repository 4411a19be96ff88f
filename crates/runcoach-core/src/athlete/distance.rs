//! The closed set of race distances records are kept for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DistanceClass {
    #[serde(rename = "5k")]
    FiveK,
    #[serde(rename = "10k")]
    TenK,
    #[serde(rename = "semi")]
    Semi,
    #[serde(rename = "marathon")]
    Marathon,
}

impl DistanceClass {
    /// All classes in display order.
    pub const ALL: [DistanceClass; 4] = [
        DistanceClass::FiveK,
        DistanceClass::TenK,
        DistanceClass::Semi,
        DistanceClass::Marathon,
    ];

    /// Stored and displayed identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceClass::FiveK => "5k",
            DistanceClass::TenK => "10k",
            DistanceClass::Semi => "semi",
            DistanceClass::Marathon => "marathon",
        }
    }

    /// Race distance in kilometres, matching the MAS fraction table.
    pub fn km(self) -> f64 {
        match self {
            DistanceClass::FiveK => 5.0,
            DistanceClass::TenK => 10.0,
            DistanceClass::Semi => 21.1,
            DistanceClass::Marathon => 42.195,
        }
    }

    /// Fastest time accepted for this class, a little under the world record.
    pub fn floor_seconds(self) -> u32 {
        match self {
            DistanceClass::FiveK => 750,
            DistanceClass::TenK => 1560,
            DistanceClass::Semi => 3420,
            DistanceClass::Marathon => 7200,
        }
    }
}

impl fmt::Display for DistanceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "5k" => Ok(DistanceClass::FiveK),
            "10k" => Ok(DistanceClass::TenK),
            "semi" => Ok(DistanceClass::Semi),
            "marathon" => Ok(DistanceClass::Marathon),
            other => Err(ValidationError::InvalidDistance(format!(
                "unknown distance '{other}', expected one of 5k, 10k, semi, marathon"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_classes() {
        for class in DistanceClass::ALL {
            assert_eq!(class.as_str().parse::<DistanceClass>().unwrap(), class);
        }
        assert_eq!("SEMI".parse::<DistanceClass>().unwrap(), DistanceClass::Semi);
    }

    #[test]
    fn rejects_unknown_class() {
        assert!(matches!(
            "15k".parse::<DistanceClass>(),
            Err(ValidationError::InvalidDistance(_))
        ));
    }

    #[test]
    fn floors_stay_under_ceiling() {
        for class in DistanceClass::ALL {
            assert!(i64::from(class.floor_seconds()) < crate::time_codec::MAX_DURATION_SECS);
        }
    }

    #[test]
    fn serde_uses_short_names() {
        assert_eq!(
            serde_json::to_string(&DistanceClass::FiveK).unwrap(),
            "\"5k\""
        );
    }
}

//! Athlete profile and its physiological fields.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Opaque, stable identifier issued by the caller's identity system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user's known physiological inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    pub user_id: UserId,
    pub display_name: String,
    /// Maximal aerobic speed in km/h
    pub maximal_aerobic_speed: Option<f64>,
    pub max_heart_rate: Option<u16>,
    pub rest_heart_rate: Option<u16>,
}

impl AthleteProfile {
    pub fn new(user_id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            maximal_aerobic_speed: None,
            max_heart_rate: None,
            rest_heart_rate: None,
        }
    }

    pub fn get(&self, field: PhysioField) -> Option<f64> {
        match field {
            PhysioField::MaxHeartRate => self.max_heart_rate.map(f64::from),
            PhysioField::RestHeartRate => self.rest_heart_rate.map(f64::from),
            PhysioField::MaximalAerobicSpeed => self.maximal_aerobic_speed,
        }
    }

    /// Validate `value` for `field` and store it.
    ///
    /// The profile is left untouched when validation fails.
    pub fn set(&mut self, field: PhysioField, value: f64) -> Result<(), ValidationError> {
        field.validate(value)?;
        match field {
            PhysioField::MaxHeartRate => self.max_heart_rate = Some(value as u16),
            PhysioField::RestHeartRate => self.rest_heart_rate = Some(value as u16),
            PhysioField::MaximalAerobicSpeed => self.maximal_aerobic_speed = Some(value),
        }
        Ok(())
    }
}

/// Profile fields a user may set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysioField {
    MaxHeartRate,
    RestHeartRate,
    MaximalAerobicSpeed,
}

/// Validation range and storage column of a field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: PhysioField,
    /// Short name accepted on input and used as column name (`fcm`, `fcr`, `vma`)
    pub column: &'static str,
    pub range: (f64, f64),
    pub integral: bool,
}

const FIELD_SPECS: [FieldSpec; 3] = [
    FieldSpec {
        field: PhysioField::MaxHeartRate,
        column: "fcm",
        range: (100.0, 250.0),
        integral: true,
    },
    FieldSpec {
        field: PhysioField::RestHeartRate,
        column: "fcr",
        range: (30.0, 120.0),
        integral: true,
    },
    FieldSpec {
        field: PhysioField::MaximalAerobicSpeed,
        column: "vma",
        range: (8.0, 25.0),
        integral: false,
    },
];

impl PhysioField {
    pub const ALL: [PhysioField; 3] = [
        PhysioField::MaxHeartRate,
        PhysioField::RestHeartRate,
        PhysioField::MaximalAerobicSpeed,
    ];

    pub fn spec(self) -> &'static FieldSpec {
        match self {
            PhysioField::MaxHeartRate => &FIELD_SPECS[0],
            PhysioField::RestHeartRate => &FIELD_SPECS[1],
            PhysioField::MaximalAerobicSpeed => &FIELD_SPECS[2],
        }
    }

    pub fn column(self) -> &'static str {
        self.spec().column
    }

    pub fn range(self) -> RangeInclusive<f64> {
        let (min, max) = self.spec().range;
        min..=max
    }

    pub fn label(self) -> &'static str {
        match self {
            PhysioField::MaxHeartRate => "max heart rate",
            PhysioField::RestHeartRate => "rest heart rate",
            PhysioField::MaximalAerobicSpeed => "maximal aerobic speed",
        }
    }

    pub fn validate(self, value: f64) -> Result<(), ValidationError> {
        let spec = self.spec();
        let (min, max) = spec.range;
        let in_range = value.is_finite() && self.range().contains(&value);
        if !in_range || (spec.integral && value.fract() != 0.0) {
            return Err(ValidationError::OutOfRange {
                field: self.label().to_string(),
                value,
                min,
                max,
            });
        }
        Ok(())
    }
}

impl fmt::Display for PhysioField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for PhysioField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        FIELD_SPECS
            .iter()
            .find(|spec| spec.column == key)
            .map(|spec| spec.field)
            .or(match key.as_str() {
                "max_heart_rate" | "max-hr" => Some(PhysioField::MaxHeartRate),
                "rest_heart_rate" | "rest-hr" => Some(PhysioField::RestHeartRate),
                "mas" | "maximal_aerobic_speed" => Some(PhysioField::MaximalAerobicSpeed),
                _ => None,
            })
            .ok_or_else(|| ValidationError::UnknownName {
                input: s.to_string(),
                expected: "fcm, fcr or vma".to_string(),
            })
    }
}

//! Race records, training log entries and the views built from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time_codec::MAX_DURATION_SECS;

use super::{AthleteProfile, DistanceClass, UserId};

/// Best time of a user over one distance class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceRecord {
    pub user_id: UserId,
    pub distance: DistanceClass,
    pub time_seconds: u32,
    pub recorded_on: NaiveDate,
}

impl RaceRecord {
    /// Build a record after checking the time against the class floor and
    /// the global ceiling.
    pub fn new(
        user_id: UserId,
        distance: DistanceClass,
        time_seconds: u32,
        recorded_on: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if i64::from(time_seconds) > MAX_DURATION_SECS {
            return Err(ValidationError::ImplausibleDuration {
                seconds: i64::from(time_seconds),
                min: i64::from(distance.floor_seconds()),
                max: MAX_DURATION_SECS,
            });
        }
        if time_seconds < distance.floor_seconds() {
            return Err(ValidationError::ImplausibleRecord {
                distance: distance.to_string(),
                seconds: time_seconds,
                floor: distance.floor_seconds(),
            });
        }
        Ok(Self {
            user_id,
            distance,
            time_seconds,
            recorded_on,
        })
    }
}

/// One entry of a user's training log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLogEntry {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub distance_km: f64,
    pub duration_seconds: u32,
    pub comment: String,
}

impl TrainingLogEntry {
    pub fn new(
        user_id: UserId,
        date: NaiveDate,
        distance_km: f64,
        duration_seconds: u32,
        comment: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if duration_seconds == 0 {
            return Err(ValidationError::ImplausibleDuration {
                seconds: 0,
                min: 1,
                max: MAX_DURATION_SECS,
            });
        }
        Ok(Self {
            user_id,
            date,
            distance_km,
            duration_seconds,
            comment: comment.into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: usize,
    pub user_id: UserId,
    pub display_name: String,
    pub time_seconds: u32,
}

/// Profile plus personal bests, in distance order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteCard {
    pub profile: Option<AthleteProfile>,
    pub records: Vec<RaceRecord>,
}

/// Result of a race record upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceOutcome {
    pub record: RaceRecord,
    pub profile: AthleteProfile,
    /// MAS estimated from the record, present for 5 km results
    pub estimated_mas: Option<f64>,
    /// Whether the estimate was plausible enough to be stored on the profile
    pub mas_updated: bool,
}

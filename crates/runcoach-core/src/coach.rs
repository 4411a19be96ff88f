//! Record keeping and profile-aware calculations over an [`AthleteStore`].
//!
//! [`Coach`] is what the command layer talks to: it validates input with the
//! data model, runs the performance model, and hands plain values to the
//! store. It holds no state of its own besides the store and coefficients.

use chrono::{Local, NaiveDate};

use crate::athlete::{
    AthleteCard, AthleteProfile, DistanceClass, LeaderboardEntry, PhysioField, RaceOutcome,
    RaceRecord, TrainingLogEntry, UserId,
};
use crate::error::{Result, ValidationError};
use crate::performance::{
    estimate_mas_from_race, heart_rate_reserve_zones, pace_zone_table, threshold_pace_with,
    Coefficients, HeartRateZone, PaceZone,
};
use crate::storage::AthleteStore;

/// Bounds applied to the `count` of [`Coach::recent_log_entries`].
pub const RECENT_LOG_MIN: usize = 1;
pub const RECENT_LOG_MAX: usize = 20;

pub struct Coach<S> {
    store: S,
    coefficients: Coefficients,
}

impl<S: AthleteStore> Coach<S> {
    pub fn new(store: S) -> Self {
        Self::with_coefficients(store, Coefficients::default())
    }

    pub fn with_coefficients(store: S, coefficients: Coefficients) -> Self {
        Self {
            store,
            coefficients,
        }
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Record a race result dated today.
    pub fn upsert_race_record(
        &mut self,
        user_id: UserId,
        display_name: &str,
        distance: DistanceClass,
        time_seconds: u32,
    ) -> Result<RaceOutcome> {
        let today = Local::now().date_naive();
        self.upsert_race_record_on(user_id, display_name, distance, time_seconds, today)
    }

    /// Record a race result, overwriting any previous record for the same
    /// distance.
    ///
    /// A 5 km result also re-estimates the athlete's MAS. The estimate is
    /// written to the profile only when it falls inside the plausible MAS
    /// range; the record itself is kept either way.
    pub fn upsert_race_record_on(
        &mut self,
        user_id: UserId,
        display_name: &str,
        distance: DistanceClass,
        time_seconds: u32,
        recorded_on: NaiveDate,
    ) -> Result<RaceOutcome> {
        let record = RaceRecord::new(user_id, distance, time_seconds, recorded_on)?;

        let estimated_mas = match distance {
            DistanceClass::FiveK => Some(estimate_mas_from_race(distance.km(), time_seconds)?),
            _ => None,
        };
        let applied_mas = estimated_mas
            .filter(|mas| PhysioField::MaximalAerobicSpeed.validate(*mas).is_ok());
        if let (Some(mas), None) = (estimated_mas, applied_mas) {
            tracing::warn!(%user_id, mas, "estimated MAS outside plausible range, profile left unchanged");
        }

        let profile = self
            .store
            .save_race_result(&record, display_name, applied_mas)?;
        tracing::info!(
            %user_id,
            %distance,
            seconds = time_seconds,
            "race record saved"
        );

        Ok(RaceOutcome {
            record,
            profile,
            estimated_mas,
            mas_updated: applied_mas.is_some(),
        })
    }

    /// Validate and store one physiological field.
    pub fn set_physiological_field(
        &mut self,
        user_id: UserId,
        display_name: &str,
        field: PhysioField,
        value: f64,
    ) -> Result<AthleteProfile> {
        field.validate(value)?;
        let profile = self.store.set_field(user_id, display_name, field, value)?;
        tracing::info!(%user_id, %field, value, "profile field updated");
        Ok(profile)
    }

    pub fn get_profile(&self, user_id: UserId) -> Result<Option<AthleteProfile>> {
        Ok(self.store.profile(user_id)?)
    }

    /// Profile and personal bests, or `None` for an unknown athlete.
    pub fn athlete_card(&self, user_id: UserId) -> Result<Option<AthleteCard>> {
        let profile = self.store.profile(user_id)?;
        let records = self.store.records(user_id)?;
        if profile.is_none() && records.is_empty() {
            return Ok(None);
        }
        Ok(Some(AthleteCard { profile, records }))
    }

    pub fn leaderboard(
        &self,
        distance: DistanceClass,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        Ok(self.store.leaderboard(distance, limit)?)
    }

    pub fn append_log_entry(
        &mut self,
        user_id: UserId,
        date: NaiveDate,
        distance_km: f64,
        duration_seconds: u32,
        comment: &str,
    ) -> Result<TrainingLogEntry> {
        let entry = TrainingLogEntry::new(user_id, date, distance_km, duration_seconds, comment)?;
        self.store.append_log(&entry)?;
        tracing::debug!(%user_id, %date, distance_km, "training log entry appended");
        Ok(entry)
    }

    /// The last `count` log entries, oldest first. `count` is clamped to 1-20.
    pub fn recent_log_entries(
        &self,
        user_id: UserId,
        count: usize,
    ) -> Result<Vec<TrainingLogEntry>> {
        let count = count.clamp(RECENT_LOG_MIN, RECENT_LOG_MAX);
        Ok(self.store.recent_logs(user_id, count)?)
    }

    fn require_mas(&self, user_id: UserId) -> Result<f64> {
        self.store
            .profile(user_id)?
            .and_then(|p| p.maximal_aerobic_speed)
            .ok_or_else(|| {
                ValidationError::MissingPrerequisite {
                    what: PhysioField::MaximalAerobicSpeed.label().to_string(),
                }
                .into()
            })
    }

    /// Pace table built from the athlete's stored MAS.
    pub fn pace_table(&self, user_id: UserId) -> Result<(f64, Vec<PaceZone>)> {
        let mas = self.require_mas(user_id)?;
        Ok((mas, pace_zone_table(mas)?))
    }

    /// Threshold pace from the stored MAS and the configured coefficient.
    pub fn threshold_pace(&self, user_id: UserId) -> Result<f64> {
        let mas = self.require_mas(user_id)?;
        Ok(threshold_pace_with(mas, &self.coefficients)?)
    }

    /// Heart-rate reserve zones from the athlete's stored max and rest rates.
    pub fn heart_rate_zones(&self, user_id: UserId) -> Result<Vec<HeartRateZone>> {
        let profile = self.store.profile(user_id)?;
        let (max_hr, rest_hr) = match profile {
            Some(AthleteProfile {
                max_heart_rate: Some(max),
                rest_heart_rate: Some(rest),
                ..
            }) => (max, rest),
            _ => {
                return Err(ValidationError::MissingPrerequisite {
                    what: "max and rest heart rate".to_string(),
                }
                .into())
            }
        };
        Ok(heart_rate_reserve_zones(max_hr, rest_hr)?)
    }
}

//! Storage contract for athlete data.
//!
//! Both the in-memory store and the SQLite database implement
//! [`AthleteStore`]. Each write method is atomic for its key: a record and
//! the profile it updates are written together or not at all.

use crate::athlete::{
    AthleteProfile, DistanceClass, LeaderboardEntry, PhysioField, RaceRecord, TrainingLogEntry,
    UserId,
};
use crate::error::DatabaseError;

pub trait AthleteStore {
    fn profile(&self, user_id: UserId) -> Result<Option<AthleteProfile>, DatabaseError>;

    /// Set one physiological field, creating the profile if needed.
    ///
    /// `value` has already been validated for `field`.
    fn set_field(
        &mut self,
        user_id: UserId,
        display_name: &str,
        field: PhysioField,
        value: f64,
    ) -> Result<AthleteProfile, DatabaseError>;

    /// Write a race record and refresh the owner's profile in one step.
    ///
    /// `mas`, when set, replaces the profile's maximal aerobic speed.
    fn save_race_result(
        &mut self,
        record: &RaceRecord,
        display_name: &str,
        mas: Option<f64>,
    ) -> Result<AthleteProfile, DatabaseError>;

    /// All records of a user, in distance order.
    fn records(&self, user_id: UserId) -> Result<Vec<RaceRecord>, DatabaseError>;

    /// Fastest times for `distance`, ties in insertion order.
    fn leaderboard(
        &self,
        distance: DistanceClass,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, DatabaseError>;

    fn append_log(&mut self, entry: &TrainingLogEntry) -> Result<(), DatabaseError>;

    /// Last `count` log entries of a user, oldest first.
    fn recent_logs(
        &self,
        user_id: UserId,
        count: usize,
    ) -> Result<Vec<TrainingLogEntry>, DatabaseError>;
}

impl<T: AthleteStore + ?Sized> AthleteStore for Box<T> {
    fn profile(&self, user_id: UserId) -> Result<Option<AthleteProfile>, DatabaseError> {
        (**self).profile(user_id)
    }

    fn set_field(
        &mut self,
        user_id: UserId,
        display_name: &str,
        field: PhysioField,
        value: f64,
    ) -> Result<AthleteProfile, DatabaseError> {
        (**self).set_field(user_id, display_name, field, value)
    }

    fn save_race_result(
        &mut self,
        record: &RaceRecord,
        display_name: &str,
        mas: Option<f64>,
    ) -> Result<AthleteProfile, DatabaseError> {
        (**self).save_race_result(record, display_name, mas)
    }

    fn records(&self, user_id: UserId) -> Result<Vec<RaceRecord>, DatabaseError> {
        (**self).records(user_id)
    }

    fn leaderboard(
        &self,
        distance: DistanceClass,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, DatabaseError> {
        (**self).leaderboard(distance, limit)
    }

    fn append_log(&mut self, entry: &TrainingLogEntry) -> Result<(), DatabaseError> {
        (**self).append_log(entry)
    }

    fn recent_logs(
        &self,
        user_id: UserId,
        count: usize,
    ) -> Result<Vec<TrainingLogEntry>, DatabaseError> {
        (**self).recent_logs(user_id, count)
    }
}

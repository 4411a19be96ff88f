//! Process-local store, exclusively owned by its [`Coach`](crate::Coach).

use std::collections::HashMap;

use crate::athlete::{
    AthleteProfile, DistanceClass, LeaderboardEntry, PhysioField, RaceRecord, TrainingLogEntry,
    UserId,
};
use crate::error::DatabaseError;

use super::store::AthleteStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    profiles: HashMap<UserId, AthleteProfile>,
    /// Insertion order is the leaderboard tie-break.
    records: Vec<RaceRecord>,
    logs: HashMap<UserId, Vec<TrainingLogEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn profile_entry(&mut self, user_id: UserId, display_name: &str) -> &mut AthleteProfile {
        let profile = self
            .profiles
            .entry(user_id)
            .or_insert_with(|| AthleteProfile::new(user_id, display_name));
        profile.display_name = display_name.to_string();
        profile
    }
}

impl AthleteStore for MemoryStore {
    fn profile(&self, user_id: UserId) -> Result<Option<AthleteProfile>, DatabaseError> {
        Ok(self.profiles.get(&user_id).cloned())
    }

    fn set_field(
        &mut self,
        user_id: UserId,
        display_name: &str,
        field: PhysioField,
        value: f64,
    ) -> Result<AthleteProfile, DatabaseError> {
        let mut updated = self
            .profiles
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| AthleteProfile::new(user_id, display_name));
        updated.display_name = display_name.to_string();
        updated
            .set(field, value)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        self.profiles.insert(user_id, updated.clone());
        Ok(updated)
    }

    fn save_race_result(
        &mut self,
        record: &RaceRecord,
        display_name: &str,
        mas: Option<f64>,
    ) -> Result<AthleteProfile, DatabaseError> {
        match self
            .records
            .iter_mut()
            .find(|r| r.user_id == record.user_id && r.distance == record.distance)
        {
            Some(existing) => {
                existing.time_seconds = record.time_seconds;
                existing.recorded_on = record.recorded_on;
            }
            None => self.records.push(record.clone()),
        }

        let profile = self.profile_entry(record.user_id, display_name);
        if let Some(mas) = mas {
            profile.maximal_aerobic_speed = Some(mas);
        }
        Ok(profile.clone())
    }

    fn records(&self, user_id: UserId) -> Result<Vec<RaceRecord>, DatabaseError> {
        let mut records: Vec<_> = self
            .records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.distance);
        Ok(records)
    }

    fn leaderboard(
        &self,
        distance: DistanceClass,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, DatabaseError> {
        let mut rows: Vec<_> = self
            .records
            .iter()
            .filter(|r| r.distance == distance)
            .filter_map(|r| {
                self.profiles
                    .get(&r.user_id)
                    .map(|p| (r.user_id, p.display_name.clone(), r.time_seconds))
            })
            .collect();
        // stable: equal times keep insertion order
        rows.sort_by_key(|(_, _, time)| *time);

        Ok(rows
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, (user_id, display_name, time_seconds))| LeaderboardEntry {
                rank: i + 1,
                user_id,
                display_name,
                time_seconds,
            })
            .collect())
    }

    fn append_log(&mut self, entry: &TrainingLogEntry) -> Result<(), DatabaseError> {
        self.logs
            .entry(entry.user_id)
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    fn recent_logs(
        &self,
        user_id: UserId,
        count: usize,
    ) -> Result<Vec<TrainingLogEntry>, DatabaseError> {
        let entries = self.logs.get(&user_id).map(Vec::as_slice).unwrap_or(&[]);
        let start = entries.len().saturating_sub(count);
        Ok(entries[start..].to_vec())
    }
}

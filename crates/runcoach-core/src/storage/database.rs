//! SQLite-backed athlete storage.
//!
//! Provides persistent storage for:
//! - Runner profiles (MAS, max and rest heart rate, display name)
//! - Personal records per distance class
//! - The append-only training log

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, Connection, OptionalExtension};

use crate::athlete::{
    AthleteProfile, DistanceClass, LeaderboardEntry, PhysioField, RaceRecord, TrainingLogEntry,
    UserId,
};
use crate::error::DatabaseError;

use super::data_dir;
use super::migrations;
use super::store::AthleteStore;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// SQLite database for athlete storage.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data_dir>/runcoach.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the data directory is unusable or the database
    /// cannot be opened or migrated.
    pub fn open() -> crate::error::Result<Self> {
        let path = data_dir()?.join("runcoach.db");
        Ok(Self::open_at(path)?)
    }

    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened database");
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database.
    pub fn open_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        migrations::migrate(&self.conn).map_err(|e| DatabaseError::MigrationFailed(e.to_string()))
    }

    fn upsert_runner_column(
        conn: &Connection,
        user_id: UserId,
        display_name: &str,
        column: &'static str,
        value: Value,
    ) -> Result<(), rusqlite::Error> {
        // `column` comes from the fixed PhysioField table, never from input.
        let sql = format!(
            "INSERT INTO runners (user_id, {column}, username) VALUES (?1, ?2, ?3)
             ON CONFLICT (user_id) DO UPDATE SET {column} = excluded.{column}, username = excluded.username"
        );
        conn.execute(&sql, params![user_id.0, value, display_name])?;
        Ok(())
    }

    fn touch_runner(
        conn: &Connection,
        user_id: UserId,
        display_name: &str,
    ) -> Result<(), rusqlite::Error> {
        conn.execute(
            "INSERT INTO runners (user_id, username) VALUES (?1, ?2)
             ON CONFLICT (user_id) DO UPDATE SET username = excluded.username",
            params![user_id.0, display_name],
        )?;
        Ok(())
    }

    fn load_profile(
        conn: &Connection,
        user_id: UserId,
    ) -> Result<Option<AthleteProfile>, rusqlite::Error> {
        conn.query_row(
            "SELECT vma, fcm, fcr, username FROM runners WHERE user_id = ?1",
            params![user_id.0],
            |row| {
                Ok(AthleteProfile {
                    user_id,
                    maximal_aerobic_speed: row.get(0)?,
                    max_heart_rate: row.get(1)?,
                    rest_heart_rate: row.get(2)?,
                    display_name: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                })
            },
        )
        .optional()
    }

    fn require_profile(conn: &Connection, user_id: UserId) -> Result<AthleteProfile, DatabaseError> {
        Self::load_profile(conn, user_id)?.ok_or_else(|| DatabaseError::CorruptRow {
            table: "runners".to_string(),
            message: format!("runner {user_id} missing after upsert"),
        })
    }
}

fn parse_date(table: &str, raw: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| DatabaseError::CorruptRow {
        table: table.to_string(),
        message: format!("bad date '{raw}': {e}"),
    })
}

fn parse_distance(raw: &str) -> Result<DistanceClass, DatabaseError> {
    raw.parse().map_err(|_| DatabaseError::CorruptRow {
        table: "records".to_string(),
        message: format!("unknown distance '{raw}'"),
    })
}

impl AthleteStore for Database {
    fn profile(&self, user_id: UserId) -> Result<Option<AthleteProfile>, DatabaseError> {
        Ok(Self::load_profile(&self.conn, user_id)?)
    }

    fn set_field(
        &mut self,
        user_id: UserId,
        display_name: &str,
        field: PhysioField,
        value: f64,
    ) -> Result<AthleteProfile, DatabaseError> {
        let bound = if field.spec().integral {
            Value::Integer(value as i64)
        } else {
            Value::Real(value)
        };
        let tx = self.conn.transaction()?;
        Self::upsert_runner_column(&tx, user_id, display_name, field.column(), bound)?;
        let profile = Self::require_profile(&tx, user_id)?;
        tx.commit()?;
        tracing::debug!(%user_id, %field, value, "stored physiological field");
        Ok(profile)
    }

    fn save_race_result(
        &mut self,
        record: &RaceRecord,
        display_name: &str,
        mas: Option<f64>,
    ) -> Result<AthleteProfile, DatabaseError> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO records (user_id, distance, time_seconds, date)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (user_id, distance) DO UPDATE
             SET time_seconds = excluded.time_seconds, date = excluded.date",
            params![
                record.user_id.0,
                record.distance.as_str(),
                record.time_seconds,
                record.recorded_on.format(DATE_FORMAT).to_string(),
            ],
        )?;
        match mas {
            Some(mas) => Self::upsert_runner_column(
                &tx,
                record.user_id,
                display_name,
                PhysioField::MaximalAerobicSpeed.column(),
                Value::Real(mas),
            )?,
            None => Self::touch_runner(&tx, record.user_id, display_name)?,
        }
        let profile = Self::require_profile(&tx, record.user_id)?;
        tx.commit()?;
        tracing::debug!(
            user_id = %record.user_id,
            distance = %record.distance,
            seconds = record.time_seconds,
            "stored race record"
        );
        Ok(profile)
    }

    fn records(&self, user_id: UserId) -> Result<Vec<RaceRecord>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT distance, time_seconds, date FROM records WHERE user_id = ?1",
        )?;
        let rows = stmt.query_map(params![user_id.0], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, u32>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (distance, time_seconds, date) = row?;
            records.push(RaceRecord {
                user_id,
                distance: parse_distance(&distance)?,
                time_seconds,
                recorded_on: parse_date("records", &date)?,
            });
        }
        records.sort_by_key(|r| r.distance);
        Ok(records)
    }

    fn leaderboard(
        &self,
        distance: DistanceClass,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT rec.user_id, r.username, rec.time_seconds
             FROM records rec
             JOIN runners r ON rec.user_id = r.user_id
             WHERE rec.distance = ?1
             ORDER BY rec.time_seconds ASC, rec.rowid ASC
             LIMIT ?2",
        )?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![distance.as_str(), limit], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, u32>(2)?,
            ))
        })?;

        let mut entries = Vec::new();
        for (i, row) in rows.enumerate() {
            let (user_id, display_name, time_seconds) = row?;
            entries.push(LeaderboardEntry {
                rank: i + 1,
                user_id: UserId(user_id),
                display_name: display_name.unwrap_or_else(|| user_id.to_string()),
                time_seconds,
            });
        }
        Ok(entries)
    }

    fn append_log(&mut self, entry: &TrainingLogEntry) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO logs (user_id, date, distance_km, duration_seconds, comment)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                entry.user_id.0,
                entry.date.format(DATE_FORMAT).to_string(),
                entry.distance_km,
                entry.duration_seconds,
                entry.comment,
            ],
        )?;
        Ok(())
    }

    fn recent_logs(
        &self,
        user_id: UserId,
        count: usize,
    ) -> Result<Vec<TrainingLogEntry>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT date, distance_km, duration_seconds, comment
             FROM logs
             WHERE user_id = ?1
             ORDER BY id DESC
             LIMIT ?2",
        )?;
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![user_id.0, count], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, u32>(2)?,
                row.get::<_, Option<String>>(3)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (date, distance_km, duration_seconds, comment) = row?;
            entries.push(TrainingLogEntry {
                user_id,
                date: parse_date("logs", &date)?,
                distance_km,
                duration_seconds,
                comment: comment.unwrap_or_default(),
            });
        }
        entries.reverse();
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn race_result_creates_runner() {
        let mut db = Database::open_memory().unwrap();
        let record = RaceRecord::new(UserId(7), DistanceClass::TenK, 2700, day(1)).unwrap();
        let profile = db.save_race_result(&record, "ana", None).unwrap();
        assert_eq!(profile.display_name, "ana");
        assert_eq!(profile.maximal_aerobic_speed, None);

        let records = db.records(UserId(7)).unwrap();
        assert_eq!(records, vec![record]);
    }

    #[test]
    fn overwrite_replaces_time_and_date() {
        let mut db = Database::open_memory().unwrap();
        let first = RaceRecord::new(UserId(7), DistanceClass::FiveK, 1500, day(1)).unwrap();
        let second = RaceRecord::new(UserId(7), DistanceClass::FiveK, 1620, day(9)).unwrap();
        db.save_race_result(&first, "ana", Some(13.0)).unwrap();
        let profile = db.save_race_result(&second, "ana", Some(12.0)).unwrap();

        assert_eq!(profile.maximal_aerobic_speed, Some(12.0));
        let records = db.records(UserId(7)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].time_seconds, 1620);
        assert_eq!(records[0].recorded_on, day(9));
    }

    #[test]
    fn set_field_touches_only_its_column() {
        let mut db = Database::open_memory().unwrap();
        db.set_field(UserId(3), "bo", PhysioField::MaxHeartRate, 190.0)
            .unwrap();
        let profile = db
            .set_field(UserId(3), "bo", PhysioField::RestHeartRate, 48.0)
            .unwrap();
        assert_eq!(profile.max_heart_rate, Some(190));
        assert_eq!(profile.rest_heart_rate, Some(48));
        assert_eq!(profile.maximal_aerobic_speed, None);
    }

    #[test]
    fn leaderboard_orders_and_limits() {
        let mut db = Database::open_memory().unwrap();
        for (user, seconds) in [(1, 1400), (2, 1250), (3, 1400), (4, 1100)] {
            let record = RaceRecord::new(UserId(user), DistanceClass::FiveK, seconds, day(1)).unwrap();
            db.save_race_result(&record, &format!("runner{user}"), None)
                .unwrap();
        }
        let board = db.leaderboard(DistanceClass::FiveK, 3).unwrap();
        let users: Vec<_> = board.iter().map(|e| e.user_id.0).collect();
        assert_eq!(users, [4, 2, 1]);
        assert!(db.leaderboard(DistanceClass::Marathon, 10).unwrap().is_empty());
    }

    #[test]
    fn logs_come_back_oldest_first() {
        let mut db = Database::open_memory().unwrap();
        for d in 1..=4 {
            let entry = TrainingLogEntry::new(UserId(1), day(d), 6.0, 1800, format!("run {d}")).unwrap();
            db.append_log(&entry).unwrap();
        }
        let recent = db.recent_logs(UserId(1), 3).unwrap();
        let comments: Vec<_> = recent.iter().map(|e| e.comment.as_str()).collect();
        assert_eq!(comments, ["run 2", "run 3", "run 4"]);
    }
}

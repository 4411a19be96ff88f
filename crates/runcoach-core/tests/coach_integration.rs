//! Integration tests running the same scenarios against both stores.

use chrono::NaiveDate;
use runcoach_core::{
    AthleteStore, Coach, CoreError, Database, DistanceClass, MemoryStore, PhysioField, UserId,
    ValidationError,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
}

fn season<S: AthleteStore>(coach: &mut Coach<S>) {
    coach
        .upsert_race_record_on(UserId(1), "ana", DistanceClass::FiveK, 1200, day(1))
        .unwrap();
    coach
        .upsert_race_record_on(UserId(2), "bo", DistanceClass::FiveK, 1105, day(2))
        .unwrap();
    coach
        .upsert_race_record_on(UserId(3), "cy", DistanceClass::FiveK, 1200, day(3))
        .unwrap();
    coach
        .upsert_race_record_on(UserId(1), "ana", DistanceClass::Marathon, 12_600, day(4))
        .unwrap();
}

fn check_leaderboard<S: AthleteStore>(mut coach: Coach<S>) {
    season(&mut coach);

    let board = coach.leaderboard(DistanceClass::FiveK, 10).unwrap();
    let names: Vec<_> = board.iter().map(|e| e.display_name.as_str()).collect();
    assert_eq!(names, ["bo", "ana", "cy"]);
    assert_eq!(board[0].rank, 1);

    let top = coach.leaderboard(DistanceClass::FiveK, 1).unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].time_seconds, 1105);

    assert!(coach.leaderboard(DistanceClass::TenK, 10).unwrap().is_empty());
}

fn check_overwrite<S: AthleteStore>(mut coach: Coach<S>) {
    season(&mut coach);
    let outcome = coach
        .upsert_race_record_on(UserId(1), "ana", DistanceClass::FiveK, 1150, day(20))
        .unwrap();
    assert!(outcome.mas_updated);

    let card = coach.athlete_card(UserId(1)).unwrap().unwrap();
    let distances: Vec<_> = card.records.iter().map(|r| r.distance).collect();
    assert_eq!(distances, [DistanceClass::FiveK, DistanceClass::Marathon]);
    assert_eq!(card.records[0].time_seconds, 1150);
    assert_eq!(card.records[0].recorded_on, day(20));

    let mas = card.profile.unwrap().maximal_aerobic_speed.unwrap();
    assert!((mas - (5.0 / (1150.0 / 3600.0)) / 0.92).abs() < 1e-9);
}

fn check_profile_fields<S: AthleteStore>(mut coach: Coach<S>) {
    let err = coach
        .set_physiological_field(UserId(5), "dee", PhysioField::MaxHeartRate, 300.0)
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::OutOfRange { .. })
    ));
    assert!(coach.get_profile(UserId(5)).unwrap().is_none());

    coach
        .set_physiological_field(UserId(5), "dee", PhysioField::MaxHeartRate, 190.0)
        .unwrap();
    coach
        .set_physiological_field(UserId(5), "dee", PhysioField::RestHeartRate, 50.0)
        .unwrap();
    let profile = coach.get_profile(UserId(5)).unwrap().unwrap();
    assert_eq!(profile.max_heart_rate, Some(190));
    assert_eq!(profile.rest_heart_rate, Some(50));

    let zones = coach.heart_rate_zones(UserId(5)).unwrap();
    assert_eq!((zones[2].low_bpm, zones[2].high_bpm), (148, 162));
}

fn check_log<S: AthleteStore>(mut coach: Coach<S>) {
    for d in 1..=6 {
        coach
            .append_log_entry(UserId(1), day(d), 8.0, 2400, &format!("day {d}"))
            .unwrap();
    }
    // same date twice is fine
    coach
        .append_log_entry(UserId(1), day(6), 3.0, 900, "double")
        .unwrap();
    coach
        .append_log_entry(UserId(2), day(6), 10.0, 3000, "other athlete")
        .unwrap();

    let recent = coach.recent_log_entries(UserId(1), 3).unwrap();
    let comments: Vec<_> = recent.iter().map(|e| e.comment.as_str()).collect();
    assert_eq!(comments, ["day 5", "day 6", "double"]);
}

#[test]
fn leaderboard_memory() {
    check_leaderboard(Coach::new(MemoryStore::new()));
}

#[test]
fn leaderboard_sqlite() {
    check_leaderboard(Coach::new(Database::open_memory().unwrap()));
}

#[test]
fn overwrite_memory() {
    check_overwrite(Coach::new(MemoryStore::new()));
}

#[test]
fn overwrite_sqlite() {
    check_overwrite(Coach::new(Database::open_memory().unwrap()));
}

#[test]
fn profile_fields_memory() {
    check_profile_fields(Coach::new(MemoryStore::new()));
}

#[test]
fn profile_fields_sqlite() {
    check_profile_fields(Coach::new(Database::open_memory().unwrap()));
}

#[test]
fn log_memory() {
    check_log(Coach::new(MemoryStore::new()));
}

#[test]
fn log_sqlite() {
    check_log(Coach::new(Database::open_memory().unwrap()));
}

#[test]
fn implausible_five_k_rejected_regardless_of_profile() {
    let mut coach = Coach::new(Database::open_memory().unwrap());
    coach
        .set_physiological_field(UserId(1), "ana", PhysioField::MaximalAerobicSpeed, 20.0)
        .unwrap();
    let err = coach
        .upsert_race_record_on(UserId(1), "ana", DistanceClass::FiveK, 700, day(1))
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::ImplausibleRecord { .. })
    ));
    let profile = coach.get_profile(UserId(1)).unwrap().unwrap();
    assert_eq!(profile.maximal_aerobic_speed, Some(20.0));
    assert!(coach.athlete_card(UserId(1)).unwrap().unwrap().records.is_empty());
}

#[test]
fn database_survives_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("runcoach.db");

    {
        let mut coach = Coach::new(Database::open_at(&path).unwrap());
        season(&mut coach);
    }

    let coach = Coach::new(Database::open_at(&path).unwrap());
    let board = coach.leaderboard(DistanceClass::Marathon, 10).unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].display_name, "ana");
    assert_eq!(board[0].time_seconds, 12_600);
}

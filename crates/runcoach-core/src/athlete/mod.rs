//! Athlete data model: profiles, race records and the training log.

mod distance;
mod profile;
mod records;

pub use distance::DistanceClass;
pub use profile::{AthleteProfile, FieldSpec, PhysioField, UserId};
pub use records::{
    AthleteCard, LeaderboardEntry, RaceOutcome, RaceRecord, TrainingLogEntry,
};

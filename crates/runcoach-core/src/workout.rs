//! Training session suggestions.
//!
//! Sessions are drawn from a fixed template table with a seeded generator,
//! so the same seed, kind and MAS always give the same suggestion.

use std::fmt;
use std::str::FromStr;

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::performance::pace_from_mas;
use crate::time_codec::format_pace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Recovery,
    Endurance,
    Tempo,
    Intervals,
    LongRun,
}

impl SessionKind {
    pub const ALL: [SessionKind; 5] = [
        SessionKind::Recovery,
        SessionKind::Endurance,
        SessionKind::Tempo,
        SessionKind::Intervals,
        SessionKind::LongRun,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SessionKind::Recovery => "recovery",
            SessionKind::Endurance => "endurance",
            SessionKind::Tempo => "tempo",
            SessionKind::Intervals => "intervals",
            SessionKind::LongRun => "long_run",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        SessionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == key)
            .ok_or_else(|| ValidationError::UnknownName {
                input: s.to_string(),
                expected: "recovery, endurance, tempo, intervals or long_run".to_string(),
            })
    }
}

struct Template {
    kind: SessionKind,
    title: &'static str,
    /// `{pace}` is replaced by the target pace
    body: &'static str,
    /// Target intensity in percent of MAS
    percentage: f64,
}

const TEMPLATES: &[Template] = &[
    Template {
        kind: SessionKind::Recovery,
        title: "Recovery jog",
        body: "30 min very easy at {pace}/km, conversation pace throughout.",
        percentage: 62.0,
    },
    Template {
        kind: SessionKind::Recovery,
        title: "Shakeout",
        body: "20 min easy at {pace}/km followed by 4 relaxed strides.",
        percentage: 65.0,
    },
    Template {
        kind: SessionKind::Endurance,
        title: "Aerobic base",
        body: "45 min steady at {pace}/km.",
        percentage: 70.0,
    },
    Template {
        kind: SessionKind::Endurance,
        title: "Progressive endurance",
        body: "50 min starting easy, finishing the last 10 min at {pace}/km.",
        percentage: 75.0,
    },
    Template {
        kind: SessionKind::Tempo,
        title: "Threshold blocks",
        body: "15 min warm-up, 3 x 8 min at {pace}/km with 2 min jog, 10 min cool-down.",
        percentage: 89.0,
    },
    Template {
        kind: SessionKind::Tempo,
        title: "Continuous tempo",
        body: "15 min warm-up, 20 min at {pace}/km, 10 min cool-down.",
        percentage: 85.0,
    },
    Template {
        kind: SessionKind::Intervals,
        title: "Short MAS intervals",
        body: "20 min warm-up, 2 x 10 x 30/30 s with the fast part at {pace}/km, 10 min cool-down.",
        percentage: 105.0,
    },
    Template {
        kind: SessionKind::Intervals,
        title: "Long MAS intervals",
        body: "20 min warm-up, 6 x 3 min at {pace}/km with 2 min jog, 10 min cool-down.",
        percentage: 95.0,
    },
    Template {
        kind: SessionKind::LongRun,
        title: "Long run",
        body: "1h30 easy at {pace}/km, take water every 30 min.",
        percentage: 68.0,
    },
    Template {
        kind: SessionKind::LongRun,
        title: "Long run with marathon finish",
        body: "1h20 easy then 20 min at {pace}/km.",
        percentage: 80.0,
    },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSuggestion {
    pub kind: SessionKind,
    pub title: String,
    pub description: String,
    pub percentage: f64,
    pub seconds_per_km: f64,
    pub pace: String,
}

/// Suggest a session for an athlete with the given MAS.
///
/// When `kind` is `None` the kind is drawn as well.
pub fn suggest_workout(
    mas: f64,
    kind: Option<SessionKind>,
    seed: u64,
) -> Result<WorkoutSuggestion, ValidationError> {
    let mut rng = Mcg128Xsl64::seed_from_u64(seed);
    let kind = match kind {
        Some(kind) => kind,
        None => SessionKind::ALL[rng.gen_range(0..SessionKind::ALL.len())],
    };

    let candidates: Vec<&Template> = TEMPLATES.iter().filter(|t| t.kind == kind).collect();
    let template = candidates
        .choose(&mut rng)
        .ok_or_else(|| ValidationError::UnknownName {
            input: kind.to_string(),
            expected: "a session kind with templates".to_string(),
        })?;

    let seconds_per_km = pace_from_mas(mas, template.percentage)?;
    let pace = format_pace(seconds_per_km);
    Ok(WorkoutSuggestion {
        kind,
        title: template.title.to_string(),
        description: template.body.replace("{pace}", &pace),
        percentage: template.percentage,
        seconds_per_km,
        pace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_session() {
        let a = suggest_workout(16.0, None, 7).unwrap();
        let b = suggest_workout(16.0, None, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn requested_kind_is_honoured() {
        for kind in SessionKind::ALL {
            for seed in 0..8 {
                assert_eq!(suggest_workout(15.0, Some(kind), seed).unwrap().kind, kind);
            }
        }
    }

    #[test]
    fn every_kind_has_templates() {
        for kind in SessionKind::ALL {
            assert!(TEMPLATES.iter().any(|t| t.kind == kind));
        }
    }

    #[test]
    fn description_carries_pace() {
        let s = suggest_workout(16.0, Some(SessionKind::Tempo), 1).unwrap();
        assert!(s.description.contains(&s.pace));
        assert!(!s.description.contains("{pace}"));
    }

    #[test]
    fn invalid_mas_rejected() {
        assert!(suggest_workout(0.0, Some(SessionKind::Recovery), 1).is_err());
    }

    #[test]
    fn kind_names() {
        assert_eq!("long-run".parse::<SessionKind>().unwrap(), SessionKind::LongRun);
        assert!(matches!(
            "sprint".parse::<SessionKind>(),
            Err(ValidationError::UnknownName { .. })
        ));
    }
}

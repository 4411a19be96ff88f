//! Parsing and formatting of human-entered durations.
//!
//! Accepted input is `mm:ss` or `hh:mm:ss`. The lenient dialect `1h05m30s`
//! or `25m30s` is normalised to colons before splitting. Groups are not
//! range-checked individually, so `90:00` is 5400 seconds.

use std::num::IntErrorKind;

use crate::error::ValidationError;

/// Shortest duration accepted from user input, in seconds.
pub const MIN_DURATION_SECS: i64 = 60;

/// Longest duration accepted from user input (48 hours), in seconds.
pub const MAX_DURATION_SECS: i64 = 172_800;

/// Placeholder rendered for an absent or zero duration.
pub const PLACEHOLDER: &str = "--:--";

/// Parse a time string into seconds.
///
/// # Errors
/// - [`ValidationError::InvalidFormat`] when the string does not split into
///   two or three integer groups.
/// - [`ValidationError::ImplausibleDuration`] when the total is below one
///   minute or above 48 hours, including groups or totals too large for
///   an `i64`.
pub fn parse_time(text: &str) -> Result<u32, ValidationError> {
    let normalized = text
        .trim()
        .to_ascii_lowercase()
        .replace(['h', 'm'], ":")
        .replace('s', "");

    let invalid = || ValidationError::InvalidFormat {
        input: text.to_string(),
    };
    let implausible = |seconds| ValidationError::ImplausibleDuration {
        seconds,
        min: MIN_DURATION_SECS,
        max: MAX_DURATION_SECS,
    };

    let groups = normalized
        .split(':')
        .map(|part| {
            part.trim().parse::<i64>().map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow => implausible(i64::MAX),
                IntErrorKind::NegOverflow => implausible(i64::MIN),
                _ => invalid(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let (hours, minutes, seconds) = match groups.as_slice() {
        [h, m, s] => (*h, *m, *s),
        [m, s] => (0, *m, *s),
        _ => return Err(invalid()),
    };

    let total = hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(|| {
            let negative = hours < 0 || minutes < 0 || seconds < 0;
            implausible(if negative { i64::MIN } else { i64::MAX })
        })?;

    check_duration(total)?;
    Ok(total as u32)
}

/// Check that a total in seconds lies inside the accepted window.
pub fn check_duration(total: i64) -> Result<(), ValidationError> {
    if !(MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&total) {
        return Err(ValidationError::ImplausibleDuration {
            seconds: total,
            min: MIN_DURATION_SECS,
            max: MAX_DURATION_SECS,
        });
    }
    Ok(())
}

/// Format seconds as `h:mm:ss` when there are hours, `m:ss` otherwise.
///
/// Zero renders as [`PLACEHOLDER`].
pub fn format_time(seconds: u32) -> String {
    if seconds == 0 {
        return PLACEHOLDER.to_string();
    }
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

pub fn format_optional(seconds: Option<u32>) -> String {
    seconds.map_or_else(|| PLACEHOLDER.to_string(), format_time)
}

/// Format a pace in seconds per kilometre, truncated to whole seconds.
pub fn format_pace(seconds_per_km: f64) -> String {
    if !seconds_per_km.is_finite() || seconds_per_km < 1.0 {
        return PLACEHOLDER.to_string();
    }
    format_time(seconds_per_km.min(u32::MAX as f64) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minutes_and_seconds() {
        assert_eq!(parse_time("25:30").unwrap(), 1530);
        assert_eq!(parse_time(" 20:00 ").unwrap(), 1200);
    }

    #[test]
    fn parses_hours() {
        assert_eq!(parse_time("1:05:30").unwrap(), 3930);
        assert_eq!(parse_time("3:29:59").unwrap(), 12599);
    }

    #[test]
    fn parses_letter_dialect() {
        assert_eq!(parse_time("1h05m30s").unwrap(), 3930);
        assert_eq!(parse_time("25m30s").unwrap(), 1530);
        assert_eq!(parse_time("1H30M00S").unwrap(), 5400);
    }

    #[test]
    fn minutes_group_is_not_capped() {
        assert_eq!(parse_time("90:00").unwrap(), 5400);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_time("patate"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_time("25"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_time("1:2:3:4"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_time("25m"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_time(""),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rejects_implausible_durations() {
        assert!(matches!(
            parse_time("100:00:00"),
            Err(ValidationError::ImplausibleDuration { seconds: 360_000, .. })
        ));
        assert!(matches!(
            parse_time("0:30"),
            Err(ValidationError::ImplausibleDuration { seconds: 30, .. })
        ));
        assert!(matches!(
            parse_time("-5:00"),
            Err(ValidationError::ImplausibleDuration { .. })
        ));
    }

    #[test]
    fn huge_groups_are_implausible_not_malformed() {
        let err = parse_time("99999999999999999999:00").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ImplausibleDuration { seconds: i64::MAX, .. }
        ));
        assert!(err.user_message().contains("too long"));

        assert!(matches!(
            parse_time("9999999999999999:00:00"),
            Err(ValidationError::ImplausibleDuration { seconds: i64::MAX, .. })
        ));
        assert!(matches!(
            parse_time("-99999999999999999999:00"),
            Err(ValidationError::ImplausibleDuration { seconds: i64::MIN, .. })
        ));
    }

    #[test]
    fn accepts_window_edges() {
        assert_eq!(parse_time("1:00").unwrap(), 60);
        assert_eq!(parse_time("48:00:00").unwrap(), 172_800);
        assert!(parse_time("48:00:01").is_err());
    }

    #[test]
    fn formats() {
        assert_eq!(format_time(0), "--:--");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(1530), "25:30");
        assert_eq!(format_time(3930), "1:05:30");
        assert_eq!(format_optional(None), "--:--");
        assert_eq!(format_optional(Some(3600)), "1:00:00");
    }

    #[test]
    fn pace_truncates() {
        assert_eq!(format_pace(245.9), "4:05");
        assert_eq!(format_pace(f64::INFINITY), "--:--");
    }
}

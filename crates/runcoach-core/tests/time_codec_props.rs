//! Property tests for the time codec.

use proptest::prelude::*;
use runcoach_core::time_codec::{format_time, parse_time, MAX_DURATION_SECS, MIN_DURATION_SECS};

proptest! {
    #[test]
    fn minutes_seconds_survive_format(m in 1u32..2880, s in 0u32..60) {
        let seconds = parse_time(&format!("{m}:{s:02}")).unwrap();
        prop_assert_eq!(seconds, m * 60 + s);
        prop_assert_eq!(parse_time(&format_time(seconds)).unwrap(), seconds);
    }

    #[test]
    fn any_accepted_total_roundtrips(total in (MIN_DURATION_SECS as u32)..=(MAX_DURATION_SECS as u32)) {
        prop_assert_eq!(parse_time(&format_time(total)).unwrap(), total);
    }

    #[test]
    fn parse_never_panics(text in "\\PC{0,16}") {
        let _ = parse_time(&text);
    }
}

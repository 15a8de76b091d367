//! Clock-face formatting and parsing of `H:MM:SS` strings

use crate::error::{PaceError, Result};

/// Format a second count as `H:MM:SS`, or `MM:SS` when under an hour.
/// Negative input renders as zero.
pub fn format_clock(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Parse `SS`, `MM:SS` or `H:MM:SS` into seconds.
///
/// Components are not range-checked, so `90` and `1:90` are both accepted.
pub fn parse_clock(input: &str) -> Result<u64> {
    let invalid = || PaceError::InvalidTimeFormat(input.to_string());

    let parts = input
        .trim()
        .split(':')
        .map(|part| part.trim().parse::<u64>().map_err(|_| invalid()))
        .collect::<Result<Vec<u64>>>()?;

    let total = match parts.as_slice() {
        [s] => Some(*s),
        [m, s] => m.checked_mul(60).and_then(|m| m.checked_add(*s)),
        [h, m, s] => h
            .checked_mul(3600)
            .and_then(|h| m.checked_mul(60).and_then(|m| h.checked_add(m)))
            .and_then(|hm| hm.checked_add(*s)),
        _ => None,
    };

    total.ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_only_under_an_hour() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(3599), "59:59");
    }

    #[test]
    fn formats_hours_without_padding() {
        assert_eq!(format_clock(3600), "1:00:00");
        assert_eq!(format_clock(7265), "2:01:05");
        assert_eq!(format_clock(36_000), "10:00:00");
    }

    #[test]
    fn negative_seconds_clamp_to_zero() {
        assert_eq!(format_clock(-42), "00:00");
    }

    #[test]
    fn parses_all_three_forms() {
        assert_eq!(parse_clock("45").unwrap(), 45);
        assert_eq!(parse_clock("15:00").unwrap(), 900);
        assert_eq!(parse_clock("2:00:00").unwrap(), 7200);
        assert_eq!(parse_clock(" 1:02:03 ").unwrap(), 3723);
    }

    #[test]
    fn rejects_wrong_part_counts_and_garbage() {
        for bad in ["", "1:2:3:4", "ab", "1::2", "-5", "1.5"] {
            let err = parse_clock(bad).unwrap_err();
            assert!(matches!(err, PaceError::InvalidTimeFormat(_)), "{bad:?} gave {err}");
        }
    }

    #[test]
    fn format_then_parse_round_trips() {
        for s in [0, 59, 60, 3599, 3600, 7265] {
            assert_eq!(parse_clock(&format_clock(s)).unwrap(), s as u64);
        }
    }
}

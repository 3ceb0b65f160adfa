// SPDX-License-Identifier: MPL-2.0
//! Time formatting for the playback labels.
//!
//! Times render as `m:ss`: minutes are not padded, seconds always take two
//! digits. Anything that is not a finite, non-negative number of seconds
//! renders as [`DEFAULT_TIME_TEXT`].

use crate::config::DEFAULT_TIME_TEXT;

/// Formats a position or duration in seconds as `m:ss`.
///
/// Fractional seconds are truncated.
///
/// # Examples
///
/// ```
/// use reelcore::video_player::time_format::format_time;
///
/// assert_eq!(format_time(75.0), "1:15");
/// assert_eq!(format_time(3599.9), "59:59");
/// assert_eq!(format_time(f64::NAN), "00:00");
/// ```
#[must_use]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return DEFAULT_TIME_TEXT.to_string();
    }
    let total = seconds as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(75.0), "1:15");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(9.0), "0:09");
        assert_eq!(format_time(600.0), "10:00");
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(format_time(59.99), "0:59");
        assert_eq!(format_time(60.4), "1:00");
    }

    #[test]
    fn minutes_are_not_wrapped_into_hours() {
        assert_eq!(format_time(3725.0), "62:05");
    }

    #[test]
    fn invalid_inputs_use_default_text() {
        assert_eq!(format_time(f64::NAN), DEFAULT_TIME_TEXT);
        assert_eq!(format_time(f64::INFINITY), DEFAULT_TIME_TEXT);
        assert_eq!(format_time(f64::NEG_INFINITY), DEFAULT_TIME_TEXT);
        assert_eq!(format_time(-1.0), DEFAULT_TIME_TEXT);
    }
}

//! Time duration formatting for report output.
//!
//! Every duration in the report uses the same "HH:MM" shape: hours
//! zero-padded to at least two digits and unbounded (a week total may exceed
//! 24), minutes always two digits, seconds dropped. Negative durations are
//! clamped to "00:00".

use chrono::Duration;

/// Formats a duration as zero-padded `HH:MM`.
///
/// # Examples
///
/// ```rust
/// use ponto::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::hours(8)), "08:00");
/// assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
/// assert_eq!(format_duration(&(Duration::hours(39))), "39:00");
/// assert_eq!(format_duration(&Duration::minutes(-5)), "00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

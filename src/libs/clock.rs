//! Parsing of textual clock readings from the Pontomais feed.
//!
//! Time cards carry their time of day as a strict `HH:MM` string (24-hour,
//! zero-padded). Only the hour:minute offset matters; all accounting is done
//! on seconds-of-day relative values, so no calendar date is attached here.
//!
//! A reading that does not match the strict form yields
//! [`ClockError::MalformedTime`] instead of silently degrading to midnight.
//! The accumulator turns that into an invalid day, so one bad record never
//! poisons the rest of the report.

use chrono::NaiveTime;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockError {
    #[error("malformed clock reading '{0}', expected HH:MM")]
    MalformedTime(String),
}

/// Parses a strict `HH:MM` clock reading into a time of day.
///
/// Accepts exactly five characters with a `:` separator and zero-padded
/// fields, e.g. `09:00` or `23:45`.
pub fn parse_clock(raw: &str) -> Result<NaiveTime, ClockError> {
    // chrono's %H/%M also accept single-digit fields, so the shape is
    // checked first to keep the wire contract strict.
    if raw.len() != 5 || raw.as_bytes()[2] != b':' {
        return Err(ClockError::MalformedTime(raw.to_string()));
    }
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| ClockError::MalformedTime(raw.to_string()))
}

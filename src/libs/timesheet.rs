//! Time accounting over clock-in/clock-out punches.
//!
//! The Pontomais feed records each day as an ordered list of punches where
//! position alternates between clocking in and clocking out. This module
//! wraps those raw punches into explicitly tagged [`ClockEvent`]s at
//! ingestion, folds each day into a worked duration, and sums the valid days
//! into a week total.
//!
//! ## Day accounting rules
//!
//! - A clock-in subtracts its seconds-of-day from the running total and
//!   leaves the day pending a matching clock-out; a clock-out adds its
//!   seconds-of-day and settles the pair.
//! - An unmatched trailing clock-in is allowed only as an *open shift*: the
//!   last event of a day whose date is still today. It accrues worked time
//!   up to the current moment instead of waiting for the clock-out record.
//! - Any other unmatched clock-in marks the day invalid. Invalid days render
//!   as `invalid` and contribute nothing to the week total.
//! - A malformed clock reading also invalidates its day (see
//!   [`crate::libs::clock`]).
//! - The final total is normalized to a wall-clock duration within one day;
//!   negative intermediate sums wrap the way a 24h clock would. Shifts that
//!   span midnight are out of scope.
//!
//! The alternating-position convention has no tolerance for duplicate or
//! missing punches beyond the open-shift rule. That is a deliberate
//! simplification for a personal reporting tool, not a payroll system.

use crate::libs::clock;
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

const DAY_SECONDS: i64 = 24 * 60 * 60;

/// Direction of a punch: clocking in or clocking out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockKind {
    In,
    Out,
}

/// A single punch recorded by the time-tracking service.
///
/// `time` keeps the raw `HH:MM` text exactly as retrieved; the report echoes
/// it verbatim and the accumulator parses it on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockEvent {
    pub date: NaiveDate,
    pub time: String,
    pub kind: ClockKind,
}

/// One calendar day's ordered punches, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayRecord {
    pub events: Vec<ClockEvent>,
}

impl DayRecord {
    /// Wraps raw `(date, time)` punches into tagged events.
    ///
    /// The feed's convention is positional: punches at even positions are
    /// clock-ins, odd positions are clock-outs. Tagging happens here, once,
    /// so the accumulator never has to reason about indices.
    pub fn from_punches<I>(punches: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, String)>,
    {
        let events = punches
            .into_iter()
            .enumerate()
            .map(|(index, (date, time))| ClockEvent {
                date,
                time,
                kind: if index % 2 == 0 { ClockKind::In } else { ClockKind::Out },
            })
            .collect();
        Self { events }
    }

    /// The day's date, taken from its first punch. Empty days have none.
    pub fn date(&self) -> Option<NaiveDate> {
        self.events.first().map(|event| event.date)
    }
}

/// Outcome of accumulating one day.
///
/// `worked = None` marks the day invalid: its punches could not be paired
/// and the open-shift rule did not apply, or a reading was malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayResult {
    pub date: Option<NaiveDate>,
    pub worked: Option<Duration>,
}

impl DayResult {
    pub fn is_valid(&self) -> bool {
        self.worked.is_some()
    }

    /// Whole minutes worked; invalid days count as zero.
    pub fn worked_minutes(&self) -> i64 {
        self.worked.map_or(0, |worked| worked.num_minutes())
    }
}

/// Per-day results in chronological order plus the week total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekReport {
    pub days: Vec<DayResult>,
    pub total: Duration,
}

/// Folds one day's punches into a worked duration.
///
/// `now` is the moment the report is generated; it both decides whether a
/// trailing clock-in counts as an open shift and supplies the provisional
/// end of that shift.
pub fn accumulate_day(day: &DayRecord, now: NaiveDateTime) -> DayResult {
    let date = day.date();
    let mut seconds: i64 = 0;
    let mut unmatched_in = false;

    for (index, event) in day.events.iter().enumerate() {
        let time = match clock::parse_clock(&event.time) {
            Ok(time) => time,
            Err(_) => return DayResult { date, worked: None },
        };
        let punch = i64::from(time.num_seconds_from_midnight());

        match event.kind {
            ClockKind::In => {
                seconds -= punch;
                unmatched_in = true;

                let is_last = index + 1 == day.events.len();
                let still_today = event.date == now.date();
                if is_last && still_today {
                    // Open shift: no clock-out record exists yet, so the
                    // shift accrues up to the current moment.
                    seconds += i64::from(now.time().num_seconds_from_midnight());
                    unmatched_in = false;
                }
            }
            ClockKind::Out => {
                seconds += punch;
                unmatched_in = false;
            }
        }
    }

    if unmatched_in {
        return DayResult { date, worked: None };
    }

    DayResult {
        date,
        worked: Some(Duration::seconds(seconds.rem_euclid(DAY_SECONDS))),
    }
}

/// Accumulates every day and sums the valid ones into a week total.
///
/// Days must already be in chronological ascending order; results keep that
/// order for rendering. Only whole minutes enter the total, matching the
/// `HH:MM` resolution of the report.
pub fn aggregate_week(days: &[DayRecord], now: NaiveDateTime) -> WeekReport {
    let results: Vec<DayResult> = days.iter().map(|day| accumulate_day(day, now)).collect();
    let total = results
        .iter()
        .fold(Duration::zero(), |acc, result| acc + Duration::minutes(result.worked_minutes()));

    WeekReport { days: results, total }
}

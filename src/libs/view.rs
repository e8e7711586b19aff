//! Console rendering of the weekly work-hours report.

use crate::libs::formatter::format_duration;
use crate::libs::timesheet::{DayRecord, WeekReport};
use std::io::{self, Write};

pub struct View {}

impl View {
    /// Writes the weekly report to `w`.
    ///
    /// Layout is deterministic so the output can be diffed or piped:
    ///
    /// ```text
    /// Work Hours:
    /// ---
    /// Data: 2024-03-04
    /// - 09:00
    /// - 12:00
    /// WorkTime: 03:00
    /// ---
    /// WorkTime: invalid
    /// WeekTime: 03:00
    /// ```
    ///
    /// The date line is omitted for days without punches, punch times are
    /// echoed verbatim as retrieved, and days whose punches cannot be paired
    /// show the literal `invalid` marker.
    pub fn week<W: Write>(w: &mut W, days: &[DayRecord], report: &WeekReport) -> io::Result<()> {
        writeln!(w, "Work Hours:")?;
        for (day, result) in days.iter().zip(&report.days) {
            writeln!(w, "---")?;
            if let Some(date) = day.date() {
                writeln!(w, "Data: {}", date.format("%Y-%m-%d"))?;
            }
            for event in &day.events {
                writeln!(w, "- {}", event.time)?;
            }
            match result.worked {
                Some(worked) => writeln!(w, "WorkTime: {}", format_duration(&worked))?,
                None => writeln!(w, "WorkTime: invalid")?,
            }
        }
        writeln!(w, "WeekTime: {}", format_duration(&report.total))?;

        Ok(())
    }
}

//! Weekly work-hours report command.
//!
//! Fetches the trailing days' time cards from Pontomais, folds them into
//! per-day worked durations and a week total, and prints the report to
//! stdout.

use crate::api::pontomais::Pontomais;
use crate::libs::{config::Config, messages::Message, timesheet, view::View};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Duration, Local};
use clap::Args;
use std::io;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(long, default_value_t = 7, help = "Number of trailing days to fetch")]
    days: i64,
}

pub async fn cmd(report_args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(pontomais_config) = config.pontomais else {
        return Err(msg_error_anyhow!(Message::PontomaisConfigMissing));
    };

    // "now" both bounds the retrieval window and decides whether today's
    // trailing clock-in counts as an open shift.
    let now = Local::now().naive_local();
    let end = now.date();
    let start = end - Duration::days(report_args.days);

    let days = Pontomais::new(&pontomais_config).work_days(start, end).await?;
    let report = timesheet::aggregate_week(&days, now);
    View::week(&mut io::stdout(), &days, &report)?;

    Ok(())
}

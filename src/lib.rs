//! # Ponto - Pontomais work hours reporter
//!
//! A command-line utility that signs in to the Pontomais time-tracking
//! service, fetches the user's clock-in/clock-out punches for the trailing
//! week, and reports hours worked per day and per week.
//!
//! ## Features
//!
//! - **Time Accounting**: Pairs clock-in/clock-out punches into worked
//!   durations, including an in-progress shift for the current day
//! - **Weekly Report**: Per-day worked time plus a week total, printed in a
//!   stable plain-text layout
//! - **Pontomais Integration**: Token-based authentication with cached
//!   sessions and automatic re-login on expiry
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ponto::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;

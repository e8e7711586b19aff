//! Core library modules for the ponto application.
//!
//! ## Features
//!
//! - **Time Accounting**: Clock reading parsing, day accumulation, week
//!   aggregation (`clock`, `timesheet`)
//! - **Presentation**: Duration formatting and report rendering
//!   (`formatter`, `view`)
//! - **Infrastructure**: Configuration, data directory resolution,
//!   credential prompting, messaging (`config`, `data_storage`, `secret`,
//!   `messages`)

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod secret;
pub mod timesheet;
pub mod view;

//! API client modules for external service integrations.
//!
//! Currently the only integration is the Pontomais time-tracking service,
//! which supplies the raw clock-in/clock-out feed the report is built from.
//! The client follows a cached-session pattern: authenticate once, reuse the
//! stored session, re-login automatically when it expires.

pub mod pontomais;

// Re-export the configuration struct for easier access from other modules
pub use pontomais::PontomaisConfig;

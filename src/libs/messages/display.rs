//! Display implementation for ponto application messages.
//!
//! Central place for all user-facing text, keeping wording consistent and
//! making the message set easy to review in one pass.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigModulePontomais => "Pontomais settings".to_string(),
            Message::PontomaisConfigMissing => "Pontomais is not configured. Run 'ponto init' first".to_string(),
            Message::PromptLogin => "Enter your Pontomais login".to_string(),
            Message::PromptApiUrl => "Enter the Pontomais API URL".to_string(),
            Message::PromptPassword => "Enter your Pontomais password".to_string(),

            // === SESSION MESSAGES ===
            Message::SessionCleared => "Cached API session removed".to_string(),
            Message::SessionExpiredRetrying => "API session expired, signing in again".to_string(),
            Message::TooManyLoginAttempts(count) => {
                format!("You entered the wrong password {} times!", count)
            }

            // === API MESSAGES ===
            Message::LoginFailed(status) => format!("Pontomais sign-in failed with status {}", status),
            Message::WorkDaysRequestFailed(status) => {
                format!("Work days request failed with status {}", status)
            }
        };
        write!(f, "{}", text)
    }
}

//! Credential acquisition for API authentication.
//!
//! The password is never stored on disk; it is taken from an environment
//! variable when present (useful for scripted runs) and otherwise requested
//! interactively. Only the resulting session token is cached, by the API
//! client itself.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Password};
use std::env;

#[derive(Clone, Debug)]
pub struct Secret {
    env_key: String,
    prompt: String,
}

impl Secret {
    pub fn new(env_key: &str, prompt: &str) -> Self {
        Self {
            env_key: env_key.to_owned(),
            prompt: prompt.to_owned(),
        }
    }

    /// Returns the secret from the environment, falling back to a prompt.
    pub fn get_or_prompt(&self) -> Result<String> {
        if let Ok(value) = env::var(&self.env_key) {
            if !value.is_empty() {
                return Ok(value);
            }
        }
        self.prompt()
    }

    /// Always asks interactively, ignoring the environment.
    pub fn prompt(&self) -> Result<String> {
        Ok(Password::with_theme(&ColorfulTheme::default()).with_prompt(&self.prompt).interact()?)
    }
}

use crate::api::pontomais::Pontomais;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

/// Drops the cached API session so the next report asks for credentials.
pub fn cmd() -> Result<()> {
    Pontomais::drop_session()?;
    msg_success!(Message::SessionCleared);
    Ok(())
}

//! Pontomais time-tracking API client.
//!
//! Handles the two collaborator concerns of the report: signing in
//! (`auth/sign_in`) and retrieving the raw work-day feed
//! (`time_card_control/current/work_days`). The authenticated session
//! (token, client id, uid) is cached in the application data directory and
//! re-created transparently when the server answers 401.

use crate::libs::messages::Message;
use crate::libs::{data_storage::DataStorage, secret::Secret, timesheet::DayRecord};
use crate::{msg_bail_anyhow, msg_debug, msg_error_anyhow, msg_print, msg_warning};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::fs;

const MAX_RETRY_COUNT: i32 = 3;
const API_VERSION: &str = "2";
const SESSION_FILE: &str = ".ponto_session";
const PASSWORD_ENV: &str = "PONTO_PASSWORD";
const SIGN_IN_URL: &str = "auth/sign_in";
const WORK_DAYS_URL: &str = "time_card_control/current/work_days";
const DEFAULT_API_URL: &str = "https://api.pontomais.com.br/api";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Serialize)]
pub struct LoginCredentials {
    login: String,
    password: String,
}

/// Authenticated session material required on every data request.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AuthSession {
    token: String,
    client_id: String,
    uid: String,
}

#[derive(Deserialize)]
struct SignInResponse {
    token: String,
    client_id: String,
    data: SignInData,
}

#[derive(Deserialize)]
struct SignInData {
    email: String,
}

#[derive(Debug, Deserialize)]
struct TimeCard {
    date: String,
    time: String,
}

#[derive(Debug, Deserialize)]
struct WorkDay {
    #[serde(default)]
    time_cards: Vec<TimeCard>,
}

#[derive(Debug, Deserialize)]
struct WorkDaysResponse {
    work_days: Vec<WorkDay>,
}

impl WorkDay {
    /// Wraps the wire punches into a tagged day record.
    fn into_record(self) -> Result<DayRecord> {
        let punches = self
            .time_cards
            .into_iter()
            .map(|card| {
                let date = NaiveDate::parse_from_str(&card.date, DATE_FORMAT)
                    .with_context(|| format!("malformed time card date '{}'", card.date))?;
                Ok((date, card.time))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(DayRecord::from_punches(punches))
    }
}

pub struct Pontomais {
    client: Client,
    config: PontomaisConfig,
    secret: Secret,
    retries: i32,
}

impl Pontomais {
    pub fn new(config: &PontomaisConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            secret: Secret::new(PASSWORD_ENV, &Message::PromptPassword.to_string()),
            retries: 0,
        }
    }

    /// Fetches the work-day feed for the inclusive date range and returns it
    /// oldest-first.
    ///
    /// The server replies most-recent-first regardless of the requested sort
    /// direction, so the day list is flipped to ascending before it reaches
    /// the accumulator.
    pub async fn work_days(&mut self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DayRecord>> {
        let start_date = start.format(DATE_FORMAT).to_string();
        let end_date = end.format(DATE_FORMAT).to_string();

        loop {
            let session = self.get_session().await?;
            let url = format!("{}/{}", self.config.api_url, WORK_DAYS_URL);
            msg_debug!("requesting work days {} - {}", start_date, end_date);

            let res = self
                .client
                .get(url)
                .query(&[
                    ("sort_direction", "asc"),
                    ("sort_property", "date"),
                    ("start_date", start_date.as_str()),
                    ("end_date", end_date.as_str()),
                    ("with_employee", "true"),
                ])
                .header("token-type", "Bearer")
                .header("api-version", API_VERSION)
                .header("access-token", &session.token)
                .header("client", &session.client_id)
                .header("uid", &session.uid)
                .send()
                .await?;

            match res.status() {
                StatusCode::UNAUTHORIZED if self.retries < MAX_RETRY_COUNT => {
                    msg_warning!(Message::SessionExpiredRetrying);
                    self.delete_session()?;
                    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                    self.retries += 1;
                    continue;
                }
                status if !status.is_success() => {
                    return Err(msg_error_anyhow!(Message::WorkDaysRequestFailed(status.to_string())));
                }
                _ => {
                    let body = res.json::<WorkDaysResponse>().await?;
                    let mut days = body
                        .work_days
                        .into_iter()
                        .map(WorkDay::into_record)
                        .collect::<Result<Vec<_>>>()?;
                    days.reverse();
                    return Ok(days);
                }
            }
        }
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSession> {
        let url = format!("{}/{}", self.config.api_url, SIGN_IN_URL);
        let res = self.client.post(url).header("api-version", API_VERSION).json(credentials).send().await?;

        if !res.status().is_success() {
            return Err(msg_error_anyhow!(Message::LoginFailed(res.status().to_string())));
        }

        let body: SignInResponse = res.json().await?;
        Ok(AuthSession {
            token: body.token,
            client_id: body.client_id,
            uid: body.data.email,
        })
    }

    async fn get_session(&mut self) -> Result<AuthSession> {
        let session_file_path = DataStorage::new().get_path(SESSION_FILE)?;
        if let Ok(session_str) = fs::read_to_string(&session_file_path) {
            if let Ok(session) = serde_json::from_str::<AuthSession>(&session_str) {
                return Ok(session);
            }
        }

        loop {
            let password = match self.retries > 0 {
                true => self.secret.prompt()?,
                false => self.secret.get_or_prompt()?,
            };
            let credentials = LoginCredentials {
                login: self.config.login.clone(),
                password,
            };
            match self.login(&credentials).await {
                Ok(session) => {
                    fs::write(&session_file_path, serde_json::to_string(&session)?)?;
                    return Ok(session);
                }
                Err(err) => {
                    if self.retries < MAX_RETRY_COUNT {
                        msg_debug!("sign-in attempt failed: {}", err);
                        self.retries += 1;
                        continue;
                    }
                    msg_bail_anyhow!(Message::TooManyLoginAttempts(MAX_RETRY_COUNT));
                }
            }
        }
    }

    fn delete_session(&self) -> Result<()> {
        Self::drop_session()
    }

    /// Removes the cached session file if one exists.
    pub fn drop_session() -> Result<()> {
        let session_file_path = DataStorage::new().get_path(SESSION_FILE)?;
        if session_file_path.exists() {
            fs::remove_file(session_file_path)?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PontomaisConfig {
    pub login: String,
    pub api_url: String,
}

impl PontomaisConfig {
    pub fn init(config: &Option<PontomaisConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            login: "".to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        });
        msg_print!(Message::ConfigModulePontomais);
        Ok(Self {
            login: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptLogin.to_string())
                .default(config.login)
                .interact_text()?,
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}

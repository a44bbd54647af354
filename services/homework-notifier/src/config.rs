//! Configuration types for the homework notifier

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the Practicum API token
pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
/// Environment variable holding the Telegram bot token
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the destination chat id
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_telegram_api_url")]
    pub telegram_api_url: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    #[serde(default = "default_log_file")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            telegram_api_url: default_telegram_api_url(),
            poll_interval_seconds: default_poll_interval(),
            request_timeout_seconds: default_request_timeout(),
            log_file: default_log_file(),
        }
    }
}

fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}

fn default_telegram_api_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_poll_interval() -> u64 {
    600
}

fn default_request_timeout() -> u64 {
    30
}

fn default_log_file() -> Option<PathBuf> {
    Some(PathBuf::from("logfile.log"))
}

/// Secrets required before the polling loop may start
#[derive(Clone)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    /// Read credentials from the process environment
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through `lookup`, failing if any is missing or empty
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let practicum_token = read(PRACTICUM_TOKEN_VAR);
        let telegram_token = read(TELEGRAM_TOKEN_VAR);
        let telegram_chat_id = read(TELEGRAM_CHAT_ID_VAR);

        match (practicum_token, telegram_token, telegram_chat_id) {
            (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) => Ok(Self {
                practicum_token,
                telegram_token,
                telegram_chat_id,
            }),
            (practicum_token, telegram_token, telegram_chat_id) => {
                let missing: Vec<&str> = [
                    (PRACTICUM_TOKEN_VAR, practicum_token.is_none()),
                    (TELEGRAM_TOKEN_VAR, telegram_token.is_none()),
                    (TELEGRAM_CHAT_ID_VAR, telegram_chat_id.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();

                tracing::error!(
                    "Ошибка чтения переменных окружения! Отсутствуют: {}",
                    missing.join(", ")
                );
                Err(crate::NotifierError::Config(format!(
                    "missing environment variables: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::NotifierError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    if config.poll_interval_seconds == 0 {
        return Err(crate::NotifierError::Config(
            "poll_interval_seconds must be greater than zero".to_string(),
        ));
    }
    if config.request_timeout_seconds == 0 {
        return Err(crate::NotifierError::Config(
            "request_timeout_seconds must be greater than zero".to_string(),
        ));
    }
    Ok(config)
}

use teloxide::types::ChatId;
use thiserror::Error;

use super::schema::Config;

pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("missing required environment variable: {}", .0.join(", "))]
    MissingSecrets(Vec<&'static str>),
    #[error("invalid config: {0}")]
    Validation(String),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = self.missing_secrets();
        if !missing.is_empty() {
            return Err(ConfigError::MissingSecrets(missing));
        }
        if self.retry_period_secs == 0 {
            return Err(ConfigError::Validation(
                "retry_period_secs must be greater than 0".to_string(),
            ));
        }
        if self.api.endpoint.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api.endpoint must not be empty".to_string(),
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "api.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.errors.capacity == 0 {
            return Err(ConfigError::Validation(
                "errors.capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn target_chat_id(&self) -> Result<ChatId, ConfigError> {
        self.chat_id
            .map(ChatId)
            .ok_or(ConfigError::MissingSecrets(vec![TELEGRAM_CHAT_ID_VAR]))
    }

    fn missing_secrets(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.practicum_token.trim().is_empty() {
            missing.push(PRACTICUM_TOKEN_VAR);
        }
        if self.telegram_token.trim().is_empty() {
            missing.push(TELEGRAM_TOKEN_VAR);
        }
        if self.chat_id.is_none_or(|id| id == 0) {
            missing.push(TELEGRAM_CHAT_ID_VAR);
        }
        missing
    }
}

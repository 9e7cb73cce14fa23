use std::{io::ErrorKind, path::Path};

use super::{
    schema::Config,
    validate::{ConfigError, PRACTICUM_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR, TELEGRAM_TOKEN_VAR},
};

/// Reads `path` (absent file means "all defaults"), applies secrets from the
/// environment and validates the result.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let mut config = read_config_file(path)?;
    config.apply_env_overrides(|key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

pub(super) fn read_config_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == ErrorKind::NotFound => String::new(),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path_str,
                source,
            });
        }
    };
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path_str,
        source,
    })
}

impl Config {
    /// Non-empty environment values win over the file.
    pub fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(token) = non_empty(PRACTICUM_TOKEN_VAR) {
            self.practicum_token = token;
        }
        if let Some(token) = non_empty(TELEGRAM_TOKEN_VAR) {
            self.telegram_token = token;
        }
        if let Some(raw) = non_empty(TELEGRAM_CHAT_ID_VAR) {
            let chat_id = raw.trim().parse::<i64>().map_err(|_| {
                ConfigError::Validation(format!("{} must be an integer", TELEGRAM_CHAT_ID_VAR))
            })?;
            self.chat_id = Some(chat_id);
        }
        Ok(())
    }
}

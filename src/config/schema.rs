use serde::Deserialize;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub practicum_token: String,
    #[serde(default)]
    pub telegram_token: String,
    #[serde(default)]
    pub chat_id: Option<i64>,
    #[serde(default = "default_retry_period_secs")]
    pub retry_period_secs: u64,
    #[serde(default)]
    pub api: Api,
    #[serde(default)]
    pub errors: Errors,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Api {
    #[serde(default = "default_api_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_api_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Errors {
    #[serde(default = "default_error_capacity")]
    pub capacity: usize,
}

use std::time::Duration;

use reqwest::{Client, header::AUTHORIZATION};
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        source: reqwest::Error,
    },
    #[error("endpoint {endpoint} is unavailable, API status code: {status}")]
    HttpStatus { endpoint: String, status: u16 },
    #[error("endpoint {endpoint} returned invalid JSON: {source}")]
    Json {
        endpoint: String,
        source: serde_json::Error,
    },
}

pub trait HomeworkApi {
    /// Fetches homework statuses changed since `from_date` (unix seconds).
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, ApiError>;
}

pub struct PracticumClient {
    http: Client,
    endpoint: String,
    token: String,
    timeout_secs: u64,
}

impl PracticumClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()
            .map_err(|source| ApiError::Request {
                endpoint: config.api.endpoint.clone(),
                source,
            })?;

        Ok(Self {
            http,
            endpoint: config.api.endpoint.clone(),
            token: config.practicum_token.clone(),
            timeout_secs: config.api.timeout_secs,
        })
    }

    fn request_error(&self, source: reqwest::Error) -> ApiError {
        ApiError::Request {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

impl HomeworkApi for PracticumClient {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, ApiError> {
        log::debug!(
            "api_request endpoint={} from_date={}",
            self.endpoint,
            from_date
        );

        let response = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date), ("timeout", self.timeout_secs as i64)])
            .send()
            .await
            .map_err(|source| self.request_error(source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| self.request_error(source))?;
        serde_json::from_str(&body).map_err(|source| ApiError::Json {
            endpoint: self.endpoint.clone(),
            source,
        })
    }
}

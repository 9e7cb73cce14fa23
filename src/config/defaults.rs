use super::schema::{Api, Errors};

pub(super) fn default_retry_period_secs() -> u64 {
    600
}

pub(super) fn default_api_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}

pub(super) fn default_api_timeout_secs() -> u64 {
    10
}

pub(super) fn default_error_capacity() -> usize {
    crate::error_collector::DEFAULT_CAPACITY
}

impl Default for Api {
    fn default() -> Self {
        Self {
            endpoint: default_api_endpoint(),
            timeout_secs: default_api_timeout_secs(),
        }
    }
}

impl Default for Errors {
    fn default() -> Self {
        Self {
            capacity: default_error_capacity(),
        }
    }
}

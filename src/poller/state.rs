use chrono::Utc;

/// What the loop carries from one cycle to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    pub cursor: i64,
    pub last_message: Option<String>,
}

impl PollState {
    /// Starts one retry period in the past so the first poll covers it.
    pub fn starting_now(retry_period_secs: u64) -> Self {
        let lookback = i64::try_from(retry_period_secs).unwrap_or(i64::MAX);
        Self::starting_at(Utc::now().timestamp().saturating_sub(lookback))
    }

    pub fn starting_at(cursor: i64) -> Self {
        Self {
            cursor,
            last_message: None,
        }
    }

    pub fn is_new(&self, message: &str) -> bool {
        self.last_message.as_deref() != Some(message)
    }
}

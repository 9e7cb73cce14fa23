use teloxide::{prelude::*, types::ChatId};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to deliver message to chat {chat_id}: {source}")]
pub struct NotifyError {
    chat_id: i64,
    source: teloxide::RequestError,
}

pub trait MessageSink {
    async fn send_text(&self, text: &str) -> Result<(), NotifyError>;
}

pub struct TelegramSink {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramSink {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

impl MessageSink for TelegramSink {
    async fn send_text(&self, text: &str) -> Result<(), NotifyError> {
        self.bot
            .send_message(self.chat_id, text)
            .await
            .map(|_| ())
            .map_err(|source| NotifyError {
                chat_id: self.chat_id.0,
                source,
            })
    }
}

/// Sends `text` once and reports whether it was delivered. Failures are
/// logged here and never propagated.
pub async fn send_message<S: MessageSink>(sink: &S, text: &str) -> bool {
    match sink.send_text(text).await {
        Ok(()) => {
            log::debug!("message_sent text={:?}", text);
            true
        }
        Err(error) => {
            log::error!("message_send_failed error={}", error);
            false
        }
    }
}

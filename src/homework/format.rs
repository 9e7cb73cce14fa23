use thiserror::Error;

use super::{status::HomeworkStatus, validate::Homework};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("API returned undocumented homework status: {0:?}")]
    UndocumentedStatus(String),
    #[error("API response has no homework name")]
    MissingName,
}

/// Renders the notification text for one homework record.
pub fn parse_status(homework: &Homework) -> Result<String, StatusError> {
    let status = HomeworkStatus::parse(&homework.status)
        .ok_or_else(|| StatusError::UndocumentedStatus(homework.status.clone()))?;
    if homework.name.trim().is_empty() {
        return Err(StatusError::MissingName);
    }

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework.name,
        status.verdict()
    ))
}

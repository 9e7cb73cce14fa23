use thiserror::Error;

use crate::api_client::{ApiError, HomeworkApi};
use crate::error_collector::ErrorCollector;
use crate::homework::{StatusBatch, StatusError, ValidationError, check_response, parse_status};
use crate::notifier::{MessageSink, send_message};

use super::state::PollState;

#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Status(#[from] StatusError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Notified,
    Unchanged,
    NoUpdates,
    DeliveryFailed,
    Failed,
}

/// One poll: fetch, validate, announce a changed status, then flush any
/// collected error reports whatever happened before.
pub async fn run_cycle<A: HomeworkApi, S: MessageSink>(
    api: &A,
    sink: &S,
    state: &mut PollState,
    errors: &ErrorCollector,
) -> CycleOutcome {
    let outcome = match poll_once(api, sink, state).await {
        Ok(outcome) => outcome,
        Err(error) => {
            log::error!("program failure: {}", error);
            CycleOutcome::Failed
        }
    };

    flush_errors(sink, errors).await;
    outcome
}

async fn poll_once<A: HomeworkApi, S: MessageSink>(
    api: &A,
    sink: &S,
    state: &mut PollState,
) -> Result<CycleOutcome, CycleError> {
    let response = api.fetch_statuses(state.cursor).await?;
    let batch: StatusBatch = check_response(&response)?;
    state.cursor = batch.current_date;

    let Some(newest) = batch.newest() else {
        log::debug!("no_new_statuses cursor={}", state.cursor);
        return Ok(CycleOutcome::NoUpdates);
    };

    let message = parse_status(newest)?;
    if !state.is_new(&message) {
        log::debug!("status_unchanged homework={:?}", newest.name);
        return Ok(CycleOutcome::Unchanged);
    }

    if send_message(sink, &message).await {
        state.last_message = Some(message);
        Ok(CycleOutcome::Notified)
    } else {
        Ok(CycleOutcome::DeliveryFailed)
    }
}

/// Sends every unseen error report; a report is marked seen only once
/// delivered. Returns the number delivered.
pub async fn flush_errors<S: MessageSink>(sink: &S, errors: &ErrorCollector) -> usize {
    let dropped = errors.take_dropped();
    if dropped > 0 {
        log::warn!("error_reports_dropped count={} reason=collector_full", dropped);
    }

    let mut delivered = 0;
    for (site, text) in errors.pending() {
        if send_message(sink, &text).await {
            errors.mark_delivered(&site);
            log::debug!("error_report_delivered site={}", site);
            delivered += 1;
        }
    }
    delivered
}

use tokio::time::{Duration, sleep};

use crate::api_client::HomeworkApi;
use crate::app_context::AppContext;
use crate::notifier::MessageSink;
use crate::poller::{PollState, run_cycle};

/// Polls forever: one cycle, then a fixed pause. Cycle failures are logged
/// and reported by `run_cycle`; nothing here ends the loop.
pub async fn run_poll_job<A: HomeworkApi, S: MessageSink>(
    api: A,
    sink: S,
    app_context: AppContext,
) {
    let retry_period = Duration::from_secs(app_context.config.retry_period_secs);
    let mut state = PollState::starting_now(app_context.config.retry_period_secs);

    log::info!(
        "poll_job_started cursor={} retry_period_secs={}",
        state.cursor,
        app_context.config.retry_period_secs
    );

    loop {
        let outcome = run_cycle(&api, &sink, &mut state, &app_context.errors).await;
        log::info!(
            "poll_cycle_finished outcome={:?} cursor={}",
            outcome,
            state.cursor
        );

        sleep(retry_period).await;
    }
}

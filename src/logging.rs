use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt};

use crate::error_collector::ErrorCollector;

/// JSON logs to stdout, plus the error collector. The collector sits outside
/// the env filter so ERROR records are captured whatever RUST_LOG says.
pub fn init_json_logging(errors: &ErrorCollector) {
    if let Err(error) = tracing_log::LogTracer::init() {
        eprintln!(
            "logging bridge initialization failed (continuing with existing logger): {}",
            error
        );
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .with_filter(env_filter);

    let subscriber = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(errors.layer());

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("global logger initialization failed: {}", error);
    }
}

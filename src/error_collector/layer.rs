use std::fmt;

use chrono::{SecondsFormat, Utc};
use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
};
use tracing_log::NormalizeEvent;
use tracing_subscriber::layer::{Context, Layer};

use super::{ErrorCollector, book::SiteKey};

/// Copies every ERROR event into the collector, keyed by call site.
pub struct ErrorCaptureLayer {
    collector: ErrorCollector,
}

impl ErrorCaptureLayer {
    pub(super) fn new(collector: ErrorCollector) -> Self {
        Self { collector }
    }
}

impl<S: Subscriber> Layer<S> for ErrorCaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        // Bridged `log` records carry their real call site in normalized metadata.
        let normalized = event.normalized_metadata();
        let metadata = normalized.as_ref().unwrap_or_else(|| event.metadata());
        if *metadata.level() != Level::ERROR {
            return;
        }

        let key = SiteKey {
            line: metadata.line().unwrap_or_default(),
            module: metadata
                .module_path()
                .unwrap_or_else(|| metadata.target())
                .to_string(),
        };

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let text = format!(
            "{} - ERROR - {}",
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            visitor.finish()
        );

        self.collector.record(key, text);
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn push(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = value,
            name if name.starts_with("log.") => {}
            name => self.fields.push(format!("{}={}", name, value)),
        }
    }

    fn finish(self) -> String {
        if self.fields.is_empty() {
            return self.message;
        }
        format!("{} {}", self.message, self.fields.join(" "))
            .trim_start()
            .to_string()
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, format!("{:?}", value));
    }
}

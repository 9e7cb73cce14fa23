mod book;
mod layer;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use book::{ErrorBook, RecordOutcome};
use layer::ErrorCaptureLayer;

pub use book::SiteKey;

pub const DEFAULT_CAPACITY: usize = 64;

/// Shared handle to the error book. One clone feeds the logging layer, another
/// is handed to the poll loop for flushing.
#[derive(Clone)]
pub struct ErrorCollector {
    book: Arc<Mutex<ErrorBook>>,
}

impl ErrorCollector {
    pub fn new(capacity: usize) -> Self {
        Self {
            book: Arc::new(Mutex::new(ErrorBook::new(capacity))),
        }
    }

    /// Applies a configured capacity after logging is already running.
    pub fn set_capacity(&self, capacity: usize) {
        self.book().set_capacity(capacity);
    }

    pub fn layer(&self) -> ErrorCaptureLayer {
        ErrorCaptureLayer::new(self.clone())
    }

    pub fn record(&self, key: SiteKey, message: String) -> RecordOutcome {
        self.book().record(key, message)
    }

    pub fn pending(&self) -> Vec<(SiteKey, String)> {
        self.book().pending()
    }

    pub fn mark_delivered(&self, key: &SiteKey) -> bool {
        self.book().mark_delivered(key)
    }

    pub fn take_dropped(&self) -> u64 {
        self.book().take_dropped()
    }

    // Never log while holding this guard: the layer locks the same book.
    fn book(&self) -> MutexGuard<'_, ErrorBook> {
        self.book.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ErrorCollector {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

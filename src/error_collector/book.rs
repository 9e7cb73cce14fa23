use std::fmt;

/// Call site of an error record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteKey {
    pub line: u32,
    pub module: String,
}

impl fmt::Display for SiteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.line, self.module)
    }
}

#[derive(Debug, Clone)]
struct ErrorEntry {
    key: SiteKey,
    message: String,
    unseen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Inserted,
    Duplicate,
    Dropped,
}

/// Insertion-ordered, capacity-bounded map of error sites. The first message
/// per site wins; delivered entries stay as dedup markers until evicted.
#[derive(Debug)]
pub struct ErrorBook {
    entries: Vec<ErrorEntry>,
    capacity: usize,
    dropped: u64,
}

impl ErrorBook {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
            dropped: 0,
        }
    }

    /// Shrinking takes effect on the next insert; nothing is evicted here.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
    }

    pub fn record(&mut self, key: SiteKey, message: String) -> RecordOutcome {
        if self.entries.iter().any(|entry| entry.key == key) {
            return RecordOutcome::Duplicate;
        }

        if self.entries.len() >= self.capacity {
            match self.entries.iter().position(|entry| !entry.unseen) {
                Some(index) => {
                    self.entries.remove(index);
                }
                None => {
                    self.dropped = self.dropped.saturating_add(1);
                    return RecordOutcome::Dropped;
                }
            }
        }

        self.entries.push(ErrorEntry {
            key,
            message,
            unseen: true,
        });
        RecordOutcome::Inserted
    }

    pub fn pending(&self) -> Vec<(SiteKey, String)> {
        self.entries
            .iter()
            .filter(|entry| entry.unseen)
            .map(|entry| (entry.key.clone(), entry.message.clone()))
            .collect()
    }

    pub fn mark_delivered(&mut self, key: &SiteKey) -> bool {
        match self.entries.iter_mut().find(|entry| &entry.key == key) {
            Some(entry) => {
                entry.unseen = false;
                true
            }
            None => false,
        }
    }

    pub fn take_dropped(&mut self) -> u64 {
        std::mem::take(&mut self.dropped)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

use serde::Serialize;
use std::sync::{Arc, Mutex};

use super::LogSink;

/// Default number of lines kept in memory.
const DEFAULT_CAPACITY: usize = 1_000;

/// A single captured output line.
#[derive(Clone, Debug, Serialize)]
pub struct OutputEntry {
    /// Monotonically increasing identifier.
    pub id: u64,
    /// RFC 3339 timestamp of when the line was written.
    pub timestamp: String,
    pub line: String,
}

/// Thread-safe, bounded in-memory sink.
#[derive(Clone, Debug)]
pub struct MemorySink {
    inner: Arc<Mutex<MemorySinkInner>>,
}

#[derive(Debug)]
struct MemorySinkInner {
    entries: Vec<OutputEntry>,
    next_id: u64,
    capacity: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemorySinkInner {
                entries: Vec::new(),
                next_id: 1,
                capacity: capacity.max(1),
            })),
        }
    }

    /// Captured entries, oldest first.
    pub fn entries(&self) -> Vec<OutputEntry> {
        self.lock().entries.clone()
    }

    /// Captured lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lock().entries.iter().map(|e| e.line.clone()).collect()
    }

    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemorySinkInner> {
        // A panicking writer cannot leave the buffer half-updated.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for MemorySink {
    fn line(&self, line: &str) {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        let timestamp = chrono::Utc::now().to_rfc3339();
        inner.entries.push(OutputEntry {
            id,
            timestamp,
            line: line.to_string(),
        });
        // Evict oldest entries when over the cap.
        if inner.entries.len() > inner.capacity {
            let excess = inner.entries.len() - inner.capacity;
            inner.entries.drain(..excess);
        }
    }
}

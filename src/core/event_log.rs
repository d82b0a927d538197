/// Bounded event log shown under the dashboard

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::fmt;

use crate::utils::EVENT_LOG_CAPACITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Alert,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARN"),
            Severity::Alert => write!(f, "ALERT"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventLogEntry {
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    pub message: String,
}

impl EventLogEntry {
    pub fn new(timestamp: DateTime<Local>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            severity,
            message: message.into(),
        }
    }
}

/// Fixed-capacity FIFO of recent events.
///
/// Storage is allocated once; when full, the oldest entry is dropped to
/// make room for the newest.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<EventLogEntry>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(EVENT_LOG_CAPACITY)
    }
}

impl EventLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn append(&mut self, entry: EventLogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Append a message stamped with the current local time
    pub fn record(&mut self, severity: Severity, message: impl Into<String>) {
        self.append(EventLogEntry::new(Local::now(), severity, message));
    }

    /// Entries oldest first
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &EventLogEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_last_hundred_in_order() {
        let mut log = EventLog::default();
        for i in 0..105 {
            log.record(Severity::Info, format!("event {}", i));
        }

        assert_eq!(log.len(), 100);
        let messages: Vec<&str> = log.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages.first(), Some(&"event 5"));
        assert_eq!(messages.last(), Some(&"event 104"));
        for (offset, message) in messages.iter().enumerate() {
            assert_eq!(*message, format!("event {}", offset + 5));
        }
    }

    #[test]
    fn test_under_capacity_keeps_everything() {
        let mut log = EventLog::with_capacity(3);
        assert!(log.is_empty());
        log.record(Severity::Alert, "a");
        log.record(Severity::Error, "b");
        assert_eq!(log.len(), 2);
        assert_eq!(log.capacity(), 3);
        assert_eq!(log.entries().next().map(|e| e.severity), Some(Severity::Alert));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut log = EventLog::with_capacity(0);
        log.record(Severity::Info, "first");
        log.record(Severity::Info, "second");
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries().last().map(|e| e.message.as_str()), Some("second"));
    }
}

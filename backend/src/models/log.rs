//! Audit log for player-visible history and test assertions.
//!
//! Every state-mutating command that succeeds, and every command rejected
//! for a business reason, appends exactly one categorized entry. The log is
//! a bounded ring: newest first, oldest evicted past the cap.

use crate::core::time::GameDate;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Category a log entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogCategory {
    System,
    Trade,
    Margin,
    Corporate,
    Politics,
    Bank,
}

/// One audit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    /// Calendar date the entry was written (intraday progress zeroed).
    pub date: GameDate,
    pub category: LogCategory,
    pub message: String,
}

/// Bounded, newest-first audit log.
///
/// # Example
/// ```
/// use market_tycoon_core_rs::{AuditLog, LogCategory, GameDate};
///
/// let mut log = AuditLog::new(3);
/// for i in 0..5 {
///     log.push(i, GameDate::new(2024, 1, 1), LogCategory::System, format!("entry {i}"));
/// }
/// assert_eq!(log.len(), 3);
/// assert_eq!(log.newest().unwrap().message, "entry 4"); // newest first
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl AuditLog {
    /// Create an empty log with the given capacity.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "log capacity must be positive");
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry at the front, evicting the oldest past capacity.
    pub fn push(&mut self, id: u64, mut date: GameDate, category: LogCategory, message: String) {
        date.ticks = 0.0;
        self.entries.push_front(LogEntry {
            id,
            date,
            category,
            message,
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter()
    }

    /// The most recent entry, if any.
    pub fn newest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    /// Entries of one category, newest first.
    pub fn of_category(&self, category: LogCategory) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.category == category).collect()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

//! Bounded in-memory log of recent calculations.

use chrono::{SecondsFormat, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;

/// Default number of retained entries.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Operator label recorded for full-expression evaluations.
pub const EXPRESSION_LABEL: &str = "expr";

/// One logged calculation.
///
/// Serialized with the short keys the HTTP clients expect:
/// `{"a": ..., "op": ..., "b": ..., "result": ..., "ts": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Left operand, or the whole expression
    pub a: String,
    /// Operator symbol, or [`EXPRESSION_LABEL`]
    pub op: String,
    /// Right operand; empty for expressions
    pub b: String,
    pub result: String,
    /// UTC timestamp, RFC 3339 with a `Z` suffix
    pub ts: String,
}

impl HistoryEntry {
    /// Entry for a two-operand calculation, stamped now.
    pub fn calculation(a: &str, op: &str, b: &str, result: &str) -> Self {
        HistoryEntry {
            a: a.to_string(),
            op: op.to_string(),
            b: b.to_string(),
            result: result.to_string(),
            ts: now(),
        }
    }

    /// Entry for an expression evaluation, stamped now.
    pub fn expression(expr: &str, result: &str) -> Self {
        Self::calculation(expr, EXPRESSION_LABEL, "", result)
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Append-only log that keeps at most `capacity` entries.
///
/// Appends are serialized by an internal lock, so one log can be shared
/// between request handlers behind an `Arc`.
#[derive(Debug)]
pub struct HistoryLog {
    entries: Mutex<VecDeque<HistoryEntry>>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryLog {
    pub fn new(capacity: usize) -> Self {
        HistoryLog {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Appends an entry, evicting the oldest ones beyond capacity.
    pub fn push(&self, entry: HistoryEntry) {
        let mut entries = self.entries.lock();
        entries.push_back(entry);
        while entries.len() > self.capacity {
            entries.pop_front();
        }
    }

    /// The newest `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> Vec<HistoryEntry> {
        let entries = self.entries.lock();
        let skip = entries.len().saturating_sub(limit);
        entries.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

//! Dispatch history tracking.
//!
//! Provides an immutable log of dispatched actions and the snapshots they
//! produced, in the spirit of a time-travel debugger.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single dispatch.
///
/// # Example
///
/// ```rust
/// use unistore::core::DispatchRecord;
/// use chrono::Utc;
///
/// let record = DispatchRecord {
///     kind: "INCREMENT".to_string(),
///     from: 0_i64,
///     to: 1_i64,
///     timestamp: Utc::now(),
/// };
/// assert!(record.changed());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchRecord<S: State> {
    /// Wire tag of the dispatched action
    pub kind: String,
    /// Snapshot before the reducer ran
    pub from: S,
    /// Snapshot the reducer returned
    pub to: S,
    /// When the dispatch happened
    pub timestamp: DateTime<Utc>,
}

impl<S: State> DispatchRecord<S> {
    /// Whether the dispatch produced a different state.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered, optionally bounded history of dispatches.
///
/// History is immutable: [`record`](Self::record) returns a new history with
/// the record appended. A bounded history drops its oldest records first.
///
/// # Example
///
/// ```rust
/// use unistore::core::{DispatchHistory, DispatchRecord};
/// use chrono::Utc;
///
/// let history = DispatchHistory::new();
/// let history = history.record(DispatchRecord {
///     kind: "INCREMENT".to_string(),
///     from: 0_i64,
///     to: 1,
///     timestamp: Utc::now(),
/// });
/// let history = history.record(DispatchRecord {
///     kind: "INCREMENT".to_string(),
///     from: 1_i64,
///     to: 2,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&0, &1, &2]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchHistory<S: State> {
    records: VecDeque<DispatchRecord<S>>,
    capacity: Option<usize>,
}

impl<S: State> Default for DispatchHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> DispatchHistory<S> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
            capacity: None,
        }
    }

    /// Create a history that keeps at most `capacity` records.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            records: VecDeque::new(),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Record a dispatch, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, record: DispatchRecord<S>) -> Self {
        let mut next = self.clone();
        next.push(record);
        next
    }

    /// Append in place, trimming to capacity.
    pub(crate) fn push(&mut self, record: DispatchRecord<S>) {
        self.records.push_back(record);
        if let Some(capacity) = self.capacity {
            while self.records.len() > capacity {
                self.records.pop_front();
            }
        }
    }

    /// Get the path of snapshots traversed.
    ///
    /// Returns the `from` snapshot of the oldest retained record, then the
    /// `to` snapshot of each record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Time between the oldest and newest retained record.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.front(), self.records.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Iterate over retained records, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &DispatchRecord<S>> {
        self.records.iter()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&DispatchRecord<S>> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

//! Undo/Redo Ledger
//!
//! A linear sequence of settings snapshots with a cursor marking the
//! current entry. Recording while the cursor sits before the last entry
//! discards everything past the cursor first: a new edit after undos
//! deliberately loses the undone future.

use serde::{Deserialize, Serialize};

use crate::filters::FilterSettings;

/// Linear undo/redo history of [`FilterSettings`] snapshots.
///
/// Snapshots are value copies of the settings at one edit event; mutating
/// the live settings after a record never changes what was recorded.
/// Undo/redo at the stack boundary are no-ops, not errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryLedger {
    snapshots: Vec<FilterSettings>,
    /// Index of the current entry. Only meaningful while non-empty.
    cursor: usize,
}

impl HistoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot of the given settings as the new current entry.
    ///
    /// Entries past the cursor (the redo branch) are discarded before the
    /// append; afterwards the cursor always points at the last entry.
    pub fn record(&mut self, settings: &FilterSettings) {
        if !self.snapshots.is_empty() && self.cursor < self.snapshots.len() - 1 {
            self.snapshots.truncate(self.cursor + 1);
        }
        self.snapshots.push(*settings);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back one entry and return the snapshot at the new cursor.
    ///
    /// Returns `None` when there is nothing to undo; the caller copies the
    /// returned snapshot back into the live settings.
    pub fn undo(&mut self) -> Option<FilterSettings> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(self.snapshots[self.cursor])
    }

    /// Step forward one entry and return the snapshot at the new cursor.
    ///
    /// Returns `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<FilterSettings> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(self.snapshots[self.cursor])
    }

    /// Whether an undo would move the cursor.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether a redo would move the cursor.
    pub fn can_redo(&self) -> bool {
        !self.snapshots.is_empty() && self.cursor < self.snapshots.len() - 1
    }

    /// The snapshot at the cursor, if any.
    pub fn current(&self) -> Option<&FilterSettings> {
        self.snapshots.get(self.cursor)
    }

    /// Cursor position; `None` while the ledger is empty.
    pub fn cursor(&self) -> Option<usize> {
        if self.snapshots.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    /// All recorded snapshots in order.
    pub fn snapshots(&self) -> &[FilterSettings] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

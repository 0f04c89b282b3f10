//! Move log with an undo/redo cursor.
//!
//! Entries are appended by commits and never modified. Undo and redo only
//! move the cursor; a new commit drops everything after the cursor.

use crate::grid::Point;

/// Points cleared by one committed move.
pub type Entry = Vec<Point>;

/// Committed moves and how many of them are currently applied.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<Entry>,
    /// Number of entries currently applied (cursor + 1).
    applied: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the most recently applied entry, or `None` at the start.
    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.applied < self.entries.len()
    }

    /// Append an entry after the cursor, discarding the redo tail.
    pub fn push(&mut self, entry: Entry) {
        debug_assert!(entry.len() >= 2, "a move clears at least two tiles");
        self.entries.truncate(self.applied);
        self.entries.push(entry);
        self.applied += 1;
    }

    /// Step the cursor back, returning the entry to revert.
    pub fn undo(&mut self) -> Option<&Entry> {
        if !self.can_undo() {
            return None;
        }
        self.applied -= 1;
        Some(&self.entries[self.applied])
    }

    /// Step the cursor forward, returning the entry to reapply.
    pub fn redo(&mut self) -> Option<&Entry> {
        if !self.can_redo() {
            return None;
        }
        self.applied += 1;
        Some(&self.entries[self.applied - 1])
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.applied = 0;
    }
}

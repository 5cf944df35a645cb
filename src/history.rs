use crate::error::Error;
use std::path::{Path, PathBuf};

/// Append log of visited working directories with a movable cursor.
///
/// The log is never empty: it is seeded with the session's starting directory
/// and only grows. [`add`](Self::add) appends and moves the cursor to the new
/// tail, except when the value equals the current tail, which is a no-op.
/// [`back`](Self::back) and [`forward`](Self::forward) only move the cursor;
/// they never mutate the log, so bouncing between entries does not create new
/// ones. A fresh `add` after going back appends past the old entries without
/// truncating them, leaving the previous "future" in the log but unreachable
/// through `forward`.
pub struct DirectoryHistory {
    entries: Vec<PathBuf>,
    cursor: usize,
}

impl DirectoryHistory {
    /// Create a history seeded with the initial working directory.
    pub fn new(initial: PathBuf) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Append `path` unless it equals the current tail, and move the cursor
    /// to the tail. Repeated identical adds leave both log and cursor alone.
    pub fn add(&mut self, path: PathBuf) {
        if self.entries.last() != Some(&path) {
            self.entries.push(path);
            self.cursor = self.entries.len() - 1;
        }
    }

    /// Move the cursor one entry toward the oldest and return it.
    pub fn back(&mut self) -> Result<PathBuf, Error> {
        if self.cursor > 0 {
            self.cursor -= 1;
            Ok(self.entries[self.cursor].clone())
        } else {
            Err(Error::NoPreviousDirectory)
        }
    }

    /// Move the cursor one entry toward the newest and return it.
    pub fn forward(&mut self) -> Result<PathBuf, Error> {
        if self.cursor < self.entries.len() - 1 {
            self.cursor += 1;
            Ok(self.entries[self.cursor].clone())
        } else {
            Err(Error::NoNextDirectory)
        }
    }

    /// The entry under the cursor.
    pub fn current(&self) -> &Path {
        &self.entries[self.cursor]
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

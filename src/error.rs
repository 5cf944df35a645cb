use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure conditions raised by path search, history navigation and dispatch.
///
/// None of these are fatal to an interactive session: the loop reports the
/// error and reads the next line. Only end-of-input on the line editor ends
/// the session.
#[derive(Debug, Error)]
pub enum Error {
    /// Upward search walked every ancestor (the root included) without
    /// finding the named subdirectory.
    #[error("directory '{name}' not found upwards from {}", start.display())]
    UpwardNotFound { name: String, start: PathBuf },

    /// Downward search exhausted the subtree without a suffix match.
    #[error("'{pattern}' not found")]
    DownwardNotFound { pattern: String },

    /// Downward search examined its full entry budget before matching.
    #[error("search limit of {limit} entries reached while looking for '{pattern}'")]
    SearchLimitReached { pattern: String, limit: usize },

    /// The target of a directory change was rejected by the filesystem.
    #[error("cannot change directory to {}: {source}", path.display())]
    ChangeDirFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `back` invoked with the history cursor already at the oldest entry.
    #[error("no previous directory in history")]
    NoPreviousDirectory,

    /// `forward` invoked with the history cursor already at the newest entry.
    #[error("no next directory in history")]
    NoNextDirectory,

    /// An external program could not be started.
    #[error("failed to start '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },
}

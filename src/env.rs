use std::env as stdenv;
use std::path::PathBuf;

/// Session-scoped view of the process state the shell cares about.
///
/// The working directory is carried here explicitly instead of being re-read
/// from the OS on every use, so the search and dispatch code can be driven
/// with an injected value. The dispatcher keeps it in sync with the real
/// process working directory when running against the OS.
#[derive(Debug, Clone)]
pub struct Environment {
    /// The current working directory for searches and command execution.
    pub current_dir: PathBuf,
}

impl Environment {
    /// Capture the current process working directory.
    pub fn capture() -> anyhow::Result<Self> {
        let current_dir = stdenv::current_dir()?;
        Ok(Self { current_dir })
    }

    /// Start from an explicit directory, bypassing the OS. Used when driving
    /// the shell against an in-memory filesystem.
    pub fn at(current_dir: PathBuf) -> Self {
        Self { current_dir }
    }
}

/// The default `cd` target: the `HOME` environment variable, or `/` when it
/// is not set.
pub fn home_dir() -> PathBuf {
    stdenv::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/"))
}

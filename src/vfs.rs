use std::io;
use std::path::{Path, PathBuf};

/// A single entry yielded by [`Vfs::list_dir`].
///
/// The flag distinguishes directories (which a downward search expands) from
/// everything else (which it matches against).
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Filesystem queries the shell core depends on.
///
/// The search algorithms, the directive transformer and the dispatcher all
/// take `&dyn Vfs` instead of calling `std::fs` directly, so the algorithmic
/// code can be exercised against an in-memory tree. The enumeration order of
/// [`list_dir`](Vfs::list_dir) is whatever the implementation yields; callers
/// must not rely on it.
pub trait Vfs {
    /// Whether `path` names an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Enumerate the immediate children of a directory.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Resolve a path to its canonical absolute form, failing if it does not
    /// exist.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Make `path` the working directory for subsequent command execution.
    fn set_current_dir(&self, path: &Path) -> io::Result<()>;
}

/// The real filesystem.
pub struct OsFs;

impl Vfs for OsFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let path = entry.path();
            let is_dir = path.is_dir();
            entries.push(DirEntry { path, is_dir });
        }
        Ok(entries)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }

    fn set_current_dir(&self, path: &Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }
}

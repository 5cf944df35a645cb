use crate::error::Error;
use crate::vfs::Vfs;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Default number of filesystem entries one downward search may examine.
pub const DEFAULT_SEARCH_LIMIT: usize = 1000;

/// Look for a directory named `name` at `start` or any of its ancestors.
///
/// Starting at `start` (an absolute directory), each level tests whether
/// `level/name` exists as a directory and returns it on the first hit. The
/// walk is a straight line to the filesystem root; siblings are never
/// entered, so the cost is proportional to the depth of `start`. The root
/// itself is tested before the search gives up with
/// [`Error::UpwardNotFound`].
pub fn upward_search(fs: &dyn Vfs, name: &str, start: &Path) -> Result<PathBuf, Error> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(name);
        if fs.is_dir(&candidate) {
            return Ok(candidate);
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => {
                return Err(Error::UpwardNotFound {
                    name: name.to_string(),
                    start: start.to_path_buf(),
                });
            }
        }
    }
}

/// Look below `start` for a file whose path relative to `start` ends with
/// `pattern`.
///
/// The subtree is walked breadth-first with a FIFO queue seeded with `start`.
/// Children are taken in whatever order the [`Vfs`] yields them; directories
/// are enqueued for later expansion and every other entry is tested with a
/// plain suffix comparison against its `start`-relative path (not a glob).
/// The first match wins and is returned as a full path.
///
/// Every entry taken from a listing, matching or not, consumes one unit of
/// `limit`. An exhausted budget fails with [`Error::SearchLimitReached`]
/// rather than silently truncating; an exhausted queue fails with
/// [`Error::DownwardNotFound`]. The budget is what guarantees termination on
/// arbitrarily large trees. Directories that cannot be listed are skipped.
pub fn downward_search(
    fs: &dyn Vfs,
    pattern: &str,
    start: &Path,
    limit: usize,
) -> Result<PathBuf, Error> {
    let mut queue = VecDeque::new();
    queue.push_back(start.to_path_buf());
    let mut examined = 0usize;

    while let Some(dir) = queue.pop_front() {
        let Ok(entries) = fs.list_dir(&dir) else {
            continue;
        };
        for entry in entries {
            if entry.is_dir {
                queue.push_back(entry.path);
            } else if let Ok(rel) = entry.path.strip_prefix(start) {
                if rel.to_string_lossy().ends_with(pattern) {
                    return Ok(entry.path);
                }
            }

            examined += 1;
            if examined >= limit {
                return Err(Error::SearchLimitReached {
                    pattern: pattern.to_string(),
                    limit,
                });
            }
        }
    }

    Err(Error::DownwardNotFound {
        pattern: pattern.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::testing::MemFs;
    use std::path::Path;

    fn sample_tree() -> MemFs {
        MemFs::new()
            .dir("/")
            .dir("/home")
            .dir("/home/user")
            .dir("/home/user/project")
            .dir("/home/user/project/src")
            .dir("/home/user/project/src/deep")
            .file("/home/user/project/src/deep/c.txt")
            .file("/home/user/project/readme.md")
    }

    #[test]
    fn test_upward_finds_closest_ancestor_match() {
        // `project` exists under /home/user; searching from a nested
        // directory must resolve to that one, not walk past it.
        let fs = sample_tree();
        let found = upward_search(&fs, "project", Path::new("/home/user/project/src")).unwrap();
        assert_eq!(found, Path::new("/home/user/project"));
    }

    #[test]
    fn test_upward_matches_start_directory_itself() {
        let fs = sample_tree();
        let found = upward_search(&fs, "src", Path::new("/home/user/project")).unwrap();
        assert_eq!(found, Path::new("/home/user/project/src"));
    }

    #[test]
    fn test_upward_tests_the_root_before_failing() {
        let fs = MemFs::new().dir("/").dir("/opt");
        let found = upward_search(&fs, "opt", Path::new("/")).unwrap();
        assert_eq!(found, Path::new("/opt"));

        let err = upward_search(&fs, "missing", Path::new("/opt")).unwrap_err();
        assert!(matches!(err, Error::UpwardNotFound { .. }));
    }

    #[test]
    fn test_downward_matches_filename_suffix() {
        let fs = sample_tree();
        let start = Path::new("/home/user/project");
        let found = downward_search(&fs, "c.txt", start, DEFAULT_SEARCH_LIMIT).unwrap();
        assert_eq!(found, Path::new("/home/user/project/src/deep/c.txt"));
    }

    #[test]
    fn test_downward_matches_multi_component_suffix() {
        let fs = sample_tree();
        let start = Path::new("/home/user/project");
        let found = downward_search(&fs, "deep/c.txt", start, DEFAULT_SEARCH_LIMIT).unwrap();
        assert_eq!(found, Path::new("/home/user/project/src/deep/c.txt"));
    }

    #[test]
    fn test_downward_rejects_non_suffix_pattern() {
        let fs = sample_tree();
        let start = Path::new("/home/user/project");
        let err = downward_search(&fs, "x.txt", start, DEFAULT_SEARCH_LIMIT).unwrap_err();
        assert!(matches!(err, Error::DownwardNotFound { .. }));
    }

    #[test]
    fn test_downward_budget_counts_every_entry() {
        // Five files in one directory, listed in sorted order. The third
        // entry is tested before the counter reaches the budget, so a limit
        // of three still finds it; anything past the budget fails.
        let fs = MemFs::new()
            .dir("/d")
            .file("/d/a")
            .file("/d/b")
            .file("/d/c")
            .file("/d/d")
            .file("/d/e");

        let found = downward_search(&fs, "c", Path::new("/d"), 3).unwrap();
        assert_eq!(found, Path::new("/d/c"));

        let err = downward_search(&fs, "e", Path::new("/d"), 3).unwrap_err();
        assert!(matches!(err, Error::SearchLimitReached { limit: 3, .. }));
    }

    #[test]
    fn test_downward_directories_consume_budget_too() {
        let fs = MemFs::new()
            .dir("/d")
            .dir("/d/sub1")
            .dir("/d/sub2")
            .file("/d/sub1/target");

        // Budget of two is spent on the two subdirectory entries before the
        // file is ever reached.
        let err = downward_search(&fs, "target", Path::new("/d"), 2).unwrap_err();
        assert!(matches!(err, Error::SearchLimitReached { .. }));

        let found = downward_search(&fs, "target", Path::new("/d"), 10).unwrap();
        assert_eq!(found, Path::new("/d/sub1/target"));
    }

    #[test]
    fn test_searches_work_on_the_real_filesystem() {
        use crate::vfs::OsFs;

        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        std::fs::create_dir_all(root.join("a/b")).unwrap();
        std::fs::create_dir(root.join("target")).unwrap();
        std::fs::write(root.join("a/b/needle.txt"), b"x").unwrap();

        let found = upward_search(&OsFs, "target", &root.join("a/b")).unwrap();
        assert_eq!(found, root.join("target"));

        let found = downward_search(&OsFs, "needle.txt", &root, DEFAULT_SEARCH_LIMIT).unwrap();
        assert_eq!(found, root.join("a/b/needle.txt"));
    }

    #[test]
    fn test_downward_empty_queue_reports_not_found() {
        let fs = MemFs::new().dir("/d").file("/d/only");
        let err = downward_search(&fs, "missing", Path::new("/d"), 100).unwrap_err();
        assert!(matches!(err, Error::DownwardNotFound { .. }));
    }
}

//! Log Directory Creation
//!
//! Walks a normalized directory path segment by segment, creating whatever is missing.

use std::fs::{self, DirBuilder};
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::LogError;
use crate::path::SEPARATOR;

/// Permission bits for created directories (rwxr-xr-x).
pub const DIR_MODE: u32 = 0o755;

/// Ensures every prefix of `dir` ending at a separator exists as a directory.
///
/// Pre-existing segments are reused. A segment that exists but is not a directory, or that
/// cannot be created, is an error. Calling this twice on the same path is a no-op the second time.
pub fn ensure_directory(dir: &str) -> Result<(), LogError> {
    for (idx, ch) in dir.char_indices() {
        // Stat without the separator: "file/" reports ENOTDIR rather than the file itself.
        if ch == SEPARATOR && idx > 0 {
            ensure_segment(Path::new(&dir[..idx]))?;
        }
    }
    // Trailing segment without a separator, e.g. "logs".
    if !dir.is_empty() && !dir.ends_with(SEPARATOR) {
        ensure_segment(Path::new(dir))?;
    }
    Ok(())
}

fn ensure_segment(segment: &Path) -> Result<(), LogError> {
    match fs::metadata(segment) {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => {
            return Err(LogError::NotADirectory {
                path: segment.to_path_buf(),
            });
        }
        Err(_) => {}
    }

    match builder().create(segment) {
        Ok(()) => {
            debug!(path = %segment.display(), "Created log directory segment");
            Ok(())
        }
        // Lost a race with another creator; fine as long as it is a directory now.
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && segment.is_dir() => Ok(()),
        Err(source) => Err(LogError::CreateDirectory {
            path: segment.to_path_buf(),
            source,
        }),
    }
}

#[cfg(unix)]
fn builder() -> DirBuilder {
    use std::os::unix::fs::DirBuilderExt;

    let mut builder = DirBuilder::new();
    builder.mode(DIR_MODE);
    builder
}

#[cfg(not(unix))]
fn builder() -> DirBuilder {
    DirBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir_string(path: &Path) -> String {
        format!("{}/", path.display())
    }

    #[test]
    fn creates_nested_segments() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("custom_dir").join("log");
        ensure_directory(&dir_string(&target)).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a").join("b");
        let dir = dir_string(&target);
        ensure_directory(&dir).unwrap();
        ensure_directory(&dir).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn reuses_partial_trees() {
        let tmp = tempfile::tempdir().unwrap();
        let existing = tmp.path().join("existing");
        fs::create_dir(&existing).unwrap();
        fs::write(existing.join("keep.txt"), b"kept").unwrap();

        ensure_directory(&dir_string(&existing.join("fresh"))).unwrap();
        assert!(existing.join("fresh").is_dir());
        assert_eq!(fs::read(existing.join("keep.txt")).unwrap(), b"kept");
    }

    #[test]
    fn accepts_path_without_trailing_separator() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("plain");
        ensure_directory(&target.display().to_string()).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn fails_when_segment_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, b"not a dir").unwrap();

        let err = ensure_directory(&dir_string(&blocker.join("logs"))).unwrap_err();
        assert!(matches!(err, LogError::NotADirectory { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn file_directly_before_separator_is_not_a_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, b"").unwrap();

        match ensure_directory(&dir_string(&blocker)).unwrap_err() {
            LogError::NotADirectory { path } => assert_eq!(path, blocker),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn created_directories_use_755() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("perm");
        ensure_directory(&dir_string(&target)).unwrap();
        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        // umask may only remove bits
        assert_eq!(mode & !DIR_MODE, 0);
    }
}

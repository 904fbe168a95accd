use filetime::{set_file_times, FileTime};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Source and destination resolve to the same file; nothing was written.
    SameFile,
}

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("permission denied: {0}")]
    PermissionDenied(#[source] io::Error),
    #[error("{0}")]
    Io(#[source] io::Error),
    #[error("copy does not match source (source {expected}, copy {actual})")]
    VerifyMismatch { expected: String, actual: String },
}

impl From<io::Error> for CopyError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(err),
            _ => Self::Io(err),
        }
    }
}

/// Copy `src` to `dst`, keeping permission bits and access/modification times.
pub fn copy_with_metadata(src: &Path, dst: &Path) -> Result<CopyOutcome, CopyError> {
    if is_same_file(src, dst) {
        return Ok(CopyOutcome::SameFile);
    }

    fs::copy(src, dst)?;

    let metadata = fs::metadata(src)?;
    set_file_times(
        dst,
        FileTime::from_last_access_time(&metadata),
        FileTime::from_last_modification_time(&metadata),
    )?;

    Ok(CopyOutcome::Copied)
}

/// Compare BLAKE3 digests of the source and its copy.
pub fn verify_copy(src: &Path, dst: &Path) -> Result<(), CopyError> {
    let expected = ext_organizer_core::hash_file(src)?;
    let actual = ext_organizer_core::hash_file(dst)?;

    match expected == actual {
        true => Ok(()),
        false => Err(CopyError::VerifyMismatch { expected, actual }),
    }
}

/// Create `path` unless it is already a directory. Parents are not created.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    match fs::create_dir(path) {
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        other => other,
    }
}

#[cfg(unix)]
fn is_same_file(src: &Path, dst: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(src), fs::metadata(dst)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(src: &Path, dst: &Path) -> bool {
    match (fs::canonicalize(src), fs::canonicalize(dst)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn copies_bytes_and_mtime() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("photo.jpg");
        let dst = dir.path().join("copy.jpg");
        fs::write(&src, b"pixels").unwrap();
        set_file_times(
            &src,
            FileTime::from_unix_time(1_700_000_010, 0),
            FileTime::from_unix_time(1_700_000_020, 0),
        )
        .unwrap();

        let outcome = copy_with_metadata(&src, &dst).unwrap();

        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(fs::read(&dst).unwrap(), b"pixels");
        let dst_meta = fs::metadata(&dst).unwrap();
        assert_eq!(
            FileTime::from_last_modification_time(&dst_meta),
            FileTime::from_unix_time(1_700_000_020, 0)
        );
    }

    #[test]
    fn overwrites_existing_destination() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("a.txt");
        let dst = dir.path().join("b.txt");
        fs::write(&src, b"new").unwrap();
        fs::write(&dst, b"old contents").unwrap();

        copy_with_metadata(&src, &dst).unwrap();

        assert_eq!(fs::read(&dst).unwrap(), b"new");
    }

    #[test]
    fn same_file_is_not_copied() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("a.txt");
        fs::write(&src, b"keep me").unwrap();

        let outcome = copy_with_metadata(&src, &dir.path().join(".").join("a.txt")).unwrap();

        assert_eq!(outcome, CopyOutcome::SameFile);
        assert_eq!(fs::read(&src).unwrap(), b"keep me");
    }

    #[test]
    fn missing_source_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = copy_with_metadata(&dir.path().join("nope"), &dir.path().join("dst")).unwrap_err();
        assert!(matches!(err, CopyError::Io(_)));
    }

    #[test]
    fn permission_denied_kind_is_mapped() {
        let err = CopyError::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, CopyError::PermissionDenied(_)));
    }

    #[test]
    fn verify_detects_mismatch() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("a.bin");
        let dst = dir.path().join("b.bin");
        fs::write(&src, b"one").unwrap();
        fs::write(&dst, b"two").unwrap();

        assert!(matches!(
            verify_copy(&src, &dst),
            Err(CopyError::VerifyMismatch { .. })
        ));

        fs::write(&dst, b"one").unwrap();
        assert!(verify_copy(&src, &dst).is_ok());
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("jpg");

        ensure_dir(&target).unwrap();
        ensure_dir(&target).unwrap();

        assert!(target.is_dir());
    }

    #[test]
    fn ensure_dir_rejects_existing_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("taken");
        fs::write(&target, b"file").unwrap();

        assert!(ensure_dir(&target).is_err());
    }

    #[test]
    fn ensure_dir_does_not_create_parents() {
        let dir = TempDir::new().unwrap();
        assert!(ensure_dir(&dir.path().join("missing/child")).is_err());
    }
}

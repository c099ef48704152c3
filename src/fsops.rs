//! Filesystem collaborators: directory provisioning and bulk byte copy.
//!
//! Thin wrappers over `std::fs`, kept out of the reconstruction logic so
//! the core never touches the filesystem directly.

use crate::error::RestoreError;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::warn;

/// Create every missing segment of `path`'s parent chain.
///
/// Idempotent; fails if a segment already exists as a non-directory.
pub fn ensure_parent_dirs(path: &Path) -> Result<(), RestoreError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };
    if parent.exists() {
        if parent.is_dir() {
            return Ok(());
        }
        return Err(RestoreError::NotADirectory(parent.to_path_buf()));
    }
    fs::create_dir_all(parent).map_err(|source| RestoreError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })
}

/// Stream all bytes from `src` to `dst`, returning the count written.
///
/// A short write relative to the source length is logged as a warning, not
/// escalated.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64, RestoreError> {
    let copy_err = |source| RestoreError::Copy {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source,
    };
    let mut reader = File::open(src).map_err(copy_err)?;
    let mut writer = File::create(dst).map_err(copy_err)?;
    let written = io::copy(&mut reader, &mut writer).map_err(copy_err)?;
    if let Ok(meta) = src.metadata() {
        if meta.len() != written {
            warn!(
                src = %src.display(),
                expected = meta.len(),
                written,
                "short copy"
            );
        }
    }
    Ok(written)
}

//! Error types for manifest decoding and tree reconstruction.

use std::path::PathBuf;
use thiserror::Error;

/// Structural errors in the manifest stream.
///
/// These are fatal: once the stream is misaligned, no later record offset
/// can be trusted, so the whole run stops.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot open manifest {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest is {0} bytes, shorter than the 6-byte header")]
    TooShort(usize),

    #[error("manifest header magic mismatch (expected \"mbdb\")")]
    MissingMagic,

    #[error("record field at offset {offset} needs {needed} bytes, only {available} remain")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

/// Per-record filesystem errors during reconstruction.
///
/// These are recoverable: reported, counted in the run summary, and never
/// abort processing of subsequent records.
#[derive(Debug, Error)]
pub enum RestoreError {
    #[error("creating directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path {0:?} already exists as a non-directory")]
    NotADirectory(PathBuf),

    #[error("copying {src:?} to {dst:?}: {source}")]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

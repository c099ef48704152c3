//! Run configuration.
//!
//! One immutable value built at startup and passed into the restore
//! pipeline; nothing in the pipeline mutates or re-reads it.

use crate::address::BlobKey;
use crate::manifest::MANIFEST_FILENAME;
use crate::report::Verbosity;
use std::path::PathBuf;

/// Whether a run writes anything to the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreMode {
    /// Decode, look up, and report only; never create paths or files.
    DecodeOnly,
    /// Copy present blobs under `output_root`.
    Copy { output_root: PathBuf },
}

#[derive(Debug, Clone)]
pub struct RestoreConfig {
    /// Folder holding `Manifest.mbdb` and the flat blob files.
    pub input_root: PathBuf,
    pub mode: RestoreMode,
    pub verbosity: Verbosity,
}

impl RestoreConfig {
    pub fn manifest_path(&self) -> PathBuf {
        self.input_root.join(MANIFEST_FILENAME)
    }

    /// Where the blob for `key` would live in the source folder.
    pub fn blob_path(&self, key: &BlobKey) -> PathBuf {
        self.input_root.join(key.to_hex())
    }
}

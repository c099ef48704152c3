//! Tree reconstruction.
//!
//! Classifies each decoded record and, for regular files whose blob exists
//! in the source folder, copies the blob back to its original relative
//! path. Directory and symlink records are reported only; directories are
//! implied by the file paths copied into them, and link targets are never
//! materialized.

use crate::address::BlobKey;
use crate::config::{RestoreConfig, RestoreMode};
use crate::error::{ManifestError, RestoreError};
use crate::fsops;
use crate::manifest::{EntryKind, Manifest, ManifestRecord};
use crate::report::Reporter;
use std::io::Write;
use tracing::{debug, info, warn};

/// What happened to one record.
#[derive(Debug)]
pub enum Outcome {
    Copied { key: BlobKey, bytes: u64 },
    WouldCopy { key: BlobKey },
    NotPresent { key: BlobKey },
    Failed { key: BlobKey, error: RestoreError },
    Directory,
    Symlink,
    Unknown,
}

/// Counters accumulated over one full pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RestoreSummary {
    pub records: u64,
    pub copied: u64,
    pub would_copy: u64,
    pub missing: u64,
    pub failed: u64,
    pub directories: u64,
    pub symlinks: u64,
    pub unknown: u64,
}

impl RestoreSummary {
    fn tally(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Copied { .. } => self.copied += 1,
            Outcome::WouldCopy { .. } => self.would_copy += 1,
            Outcome::NotPresent { .. } => self.missing += 1,
            Outcome::Failed { .. } => self.failed += 1,
            Outcome::Directory => self.directories += 1,
            Outcome::Symlink => self.symlinks += 1,
            Outcome::Unknown => self.unknown += 1,
        }
    }
}

pub struct Restorer {
    config: RestoreConfig,
}

impl Restorer {
    pub fn new(config: RestoreConfig) -> Self {
        Restorer { config }
    }

    pub fn config(&self) -> &RestoreConfig {
        &self.config
    }

    /// Run one full decoding pass over `manifest`, reporting each record.
    ///
    /// Structural stream errors abort the pass; per-record filesystem
    /// failures are reported and counted, then processing continues, so a
    /// partially populated output tree is a possible outcome.
    pub fn run<W: Write>(
        &self,
        manifest: &Manifest,
        reporter: &mut Reporter<W>,
    ) -> Result<RestoreSummary, ManifestError> {
        let mut summary = RestoreSummary::default();
        for record in manifest.records()? {
            let record = record?;
            summary.records += 1;
            reporter.record(&record);

            let outcome = self.apply(&record);
            if let Outcome::Failed { error, .. } = &outcome {
                warn!(path = %record.relative_path, %error, "entry restore failed");
            }
            summary.tally(&outcome);
            reporter.outcome(&record, &outcome);
        }
        info!(
            records = summary.records,
            copied = summary.copied,
            missing = summary.missing,
            failed = summary.failed,
            "manifest pass complete"
        );
        Ok(summary)
    }

    /// Decide and perform the filesystem action for one record.
    pub fn apply(&self, record: &ManifestRecord) -> Outcome {
        match record.kind() {
            EntryKind::File => self.restore_file(record),
            EntryKind::Directory => Outcome::Directory,
            EntryKind::Symlink => Outcome::Symlink,
            EntryKind::Unknown => Outcome::Unknown,
        }
    }

    fn restore_file(&self, record: &ManifestRecord) -> Outcome {
        let key = BlobKey::for_record(record);
        let blob = self.config.blob_path(&key);
        if !blob.exists() {
            return Outcome::NotPresent { key };
        }
        let output_root = match &self.config.mode {
            RestoreMode::DecodeOnly => return Outcome::WouldCopy { key },
            RestoreMode::Copy { output_root } => output_root,
        };
        let dest = output_root.join(&record.relative_path);
        let result =
            fsops::ensure_parent_dirs(&dest).and_then(|_| fsops::copy_file(&blob, &dest));
        match result {
            Ok(bytes) => {
                debug!(blob = %key, dest = %dest.display(), bytes, "blob copied");
                Outcome::Copied { key, bytes }
            }
            Err(error) => Outcome::Failed { key, error },
        }
    }
}

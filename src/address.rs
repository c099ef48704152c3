//! Content-address derivation for blob lookup.
//!
//! Blobs live flat in the backup folder under the lowercase hex SHA-1 of
//! `"{domain}-{relative_path}"`. The key is the join between the manifest
//! and the blob store, so derivation must be deterministic.

use crate::manifest::ManifestRecord;
use sha1::{Digest, Sha1};
use std::fmt;

/// SHA-1 digest naming one entry's content blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlobKey([u8; 20]);

impl BlobKey {
    pub fn new(domain: &str, relative_path: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(domain.as_bytes());
        hasher.update(b"-");
        hasher.update(relative_path.as_bytes());
        BlobKey(hasher.finalize().into())
    }

    pub fn for_record(record: &ManifestRecord) -> Self {
        Self::new(&record.domain, &record.relative_path)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// The blob's filename in the flattened backup folder.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for BlobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

//! Memory-mapped `Manifest.mbdb` access and the binary record decoder.

mod cursor;
mod decoder;
mod record;

pub use cursor::ByteCursor;
pub use decoder::{RecordDecoder, HEADER_LEN, MAGIC};
pub use record::{EntryKind, ManifestRecord, Property, ENTRY_TYPE_MASK};

use crate::error::ManifestError;
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Conventional manifest filename inside a backup folder.
pub const MANIFEST_FILENAME: &str = "Manifest.mbdb";

/// Whole-file read-only mapping of a manifest.
///
/// Owns the buffer for the duration of one decoding pass; the mapping is
/// released when the `Manifest` is dropped.
#[derive(Debug)]
pub struct Manifest {
    map: Mmap,
    path: PathBuf,
}

impl Manifest {
    /// Map `{input_root}/Manifest.mbdb`.
    pub fn open_in(input_root: &Path) -> Result<Self, ManifestError> {
        Self::open(&input_root.join(MANIFEST_FILENAME))
    }

    pub fn open(path: &Path) -> Result<Self, ManifestError> {
        let open_err = |source| ManifestError::Open {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(open_err)?;
        // Safety: mapped read-only, and the backup folder is not modified
        // for the duration of the run.
        let map = unsafe { Mmap::map(&file) }.map_err(open_err)?;
        Ok(Manifest {
            map,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        &self.map
    }

    /// Validate the prologue and return a decoder over the record stream.
    pub fn records(&self) -> Result<RecordDecoder<'_>, ManifestError> {
        RecordDecoder::new(&self.map)
    }
}

//! Structured manifest records and entry-type classification.

use serde::Serialize;

/// Bits of `mode` that carry the entry type.
pub const ENTRY_TYPE_MASK: u16 = 0xE000;

/// One filesystem entry decoded from the manifest stream.
///
/// Records are transient: decoded one at a time, handed to the
/// reconstructor, and discarded. `domain` and `relative_path` decode the
/// absent sentinel to an empty string since they feed the content-address
/// key; the remaining string fields keep absence explicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestRecord {
    pub domain: String,
    pub relative_path: String,
    /// Absolute target for symlink entries; decoded, never materialized.
    pub link_target: Option<String>,
    /// Device-supplied content fingerprint; not verified here.
    pub digest: Option<String>,
    /// Present for encrypted entries; decoded, never used to decrypt.
    pub encryption_key: Option<String>,
    pub mode: u16,
    pub inode: u64,
    pub user_id: u32,
    pub group_id: u32,
    pub mtime: u32,
    pub atime: u32,
    pub ctime: u32,
    pub size: u64,
    pub protection_class: u8,
    /// Opaque name/value pairs, surfaced only by the reporting layer.
    pub properties: Vec<Property>,
}

/// One opaque record property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl ManifestRecord {
    pub fn kind(&self) -> EntryKind {
        EntryKind::from_mode(self.mode)
    }
}

/// Entry type drawn from the high bits of `mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Unknown,
}

impl EntryKind {
    pub fn from_mode(mode: u16) -> Self {
        match mode & ENTRY_TYPE_MASK {
            0x8000 => EntryKind::File,
            0x4000 => EntryKind::Directory,
            0xA000 => EntryKind::Symlink,
            _ => EntryKind::Unknown,
        }
    }
}

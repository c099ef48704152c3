//! Record-stream decoder for the `mbdb` manifest format.
//!
//! There is no record count in the header: the stream simply runs to the
//! end of the buffer, and each record's start offset depends on the exact
//! bytes consumed by the one before it. Clean termination is the cursor
//! landing precisely on the buffer end; anything short of a full record is
//! corruption, not end-of-stream.

use crate::error::ManifestError;
use crate::manifest::cursor::ByteCursor;
use crate::manifest::record::{ManifestRecord, Property};

/// First four bytes of a valid manifest.
pub const MAGIC: &[u8; 4] = b"mbdb";

/// Magic plus two version/reserved bytes, which are not validated.
pub const HEADER_LEN: usize = 6;

/// Longest decoded value retained for any single string field. Content
/// beyond this is dropped from the value; the cursor still advances by the
/// declared length.
const MAX_FIELD_LEN: usize = 1024;

/// Iterator over the manifest's record stream.
///
/// Yields `Err` at most once: an out-of-bounds read means the stream is
/// misaligned and no later offset can be trusted, so the decoder stops
/// rather than silently truncating output.
pub struct RecordDecoder<'a> {
    cursor: ByteCursor<'a>,
    poisoned: bool,
}

impl<'a> RecordDecoder<'a> {
    /// Validate the six-byte prologue and position the cursor at the first
    /// record.
    pub fn new(buf: &'a [u8]) -> Result<Self, ManifestError> {
        if buf.len() < HEADER_LEN {
            return Err(ManifestError::TooShort(buf.len()));
        }
        if &buf[..MAGIC.len()] != MAGIC {
            return Err(ManifestError::MissingMagic);
        }
        Ok(RecordDecoder {
            cursor: ByteCursor::starting_at(buf, HEADER_LEN),
            poisoned: false,
        })
    }

    fn decode_record(&mut self) -> Result<ManifestRecord, ManifestError> {
        let cursor = &mut self.cursor;

        let domain = cursor.read_string(MAX_FIELD_LEN)?.unwrap_or_default();
        let relative_path = cursor.read_string(MAX_FIELD_LEN)?.unwrap_or_default();
        let link_target = cursor.read_string(MAX_FIELD_LEN)?;
        let digest = cursor.read_string(MAX_FIELD_LEN)?;
        let encryption_key = cursor.read_string(MAX_FIELD_LEN)?;

        let mode = cursor.read_u16_be()?;
        let inode = cursor.read_u64_be()?;
        let user_id = cursor.read_u32_be()?;
        let group_id = cursor.read_u32_be()?;
        let mtime = cursor.read_u32_be()?;
        let atime = cursor.read_u32_be()?;
        let ctime = cursor.read_u32_be()?;
        let size = cursor.read_u64_be()?;
        let protection_class = cursor.read_u8()?;
        let num_properties = cursor.read_u8()?;

        let mut properties = Vec::with_capacity(num_properties as usize);
        for _ in 0..num_properties {
            let name = cursor.read_string(MAX_FIELD_LEN)?;
            let value = cursor.read_string(MAX_FIELD_LEN)?;
            properties.push(Property { name, value });
        }

        Ok(ManifestRecord {
            domain,
            relative_path,
            link_target,
            digest,
            encryption_key,
            mode,
            inode,
            user_id,
            group_id,
            mtime,
            atime,
            ctime,
            size,
            protection_class,
            properties,
        })
    }
}

impl<'a> Iterator for RecordDecoder<'a> {
    type Item = Result<ManifestRecord, ManifestError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.poisoned || !self.cursor.remaining() {
            return None;
        }
        match self.decode_record() {
            Ok(record) => Some(Ok(record)),
            Err(e) => {
                self.poisoned = true;
                Some(Err(e))
            }
        }
    }
}

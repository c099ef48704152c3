//! Bounds-checked read position over the manifest buffer.
//!
//! Every read declares its width up front and either advances by exactly
//! that many bytes or fails with `OutOfBounds`. Raw offsets never leave
//! this module; the declared widths are what keep the record stream
//! aligned.

use crate::error::ManifestError;

/// Two length bytes of `0xFFFF` mark an absent string field.
const ABSENT_SENTINEL: u16 = 0xFFFF;

/// Lead-byte patterns for 2-, 3-, and 4-byte UTF-8 sequences.
const UTF8_LEAD_MASKS: [u8; 3] = [0b1100_0000, 0b1110_0000, 0b1111_0000];

/// Read cursor over an immutable byte buffer.
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        ByteCursor { buf, pos: 0 }
    }

    /// Cursor positioned at `pos`, used to skip a fixed prologue.
    pub fn starting_at(buf: &'a [u8], pos: usize) -> Self {
        ByteCursor { buf, pos }
    }

    /// Current offset, for diagnostics only.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True while the cursor precedes the buffer's logical end.
    pub fn remaining(&self) -> bool {
        self.pos < self.buf.len()
    }

    /// Take exactly `width` bytes or fail without moving.
    fn take(&mut self, width: usize) -> Result<&'a [u8], ManifestError> {
        let available = self.buf.len() - self.pos;
        if width > available {
            return Err(ManifestError::OutOfBounds {
                offset: self.pos,
                needed: width,
                available,
            });
        }
        let bytes = &self.buf[self.pos..self.pos + width];
        self.pos += width;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, ManifestError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16_be(&mut self) -> Result<u16, ManifestError> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u32_be(&mut self) -> Result<u32, ManifestError> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_u64_be(&mut self) -> Result<u64, ManifestError> {
        let b = self.take(8)?;
        Ok(u64::from_be_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    /// Read one length-prefixed string field.
    ///
    /// Layout is a 2-byte big-endian length `L` followed by `L` content
    /// bytes, except that length bytes of `0xFFFF` mean "field absent"
    /// (2 bytes total, `None`, distinct from an empty string).
    ///
    /// The cursor always advances by exactly `2 + L`; the content-level
    /// UTF-8 scan never influences where the next field starts. `max_len`
    /// caps the number of output bytes kept, not the advance.
    pub fn read_string(&mut self, max_len: usize) -> Result<Option<String>, ManifestError> {
        let declared = self.read_u16_be()?;
        if declared == ABSENT_SENTINEL {
            return Ok(None);
        }
        let content = self.take(declared as usize)?;
        Ok(Some(scan_modified_utf8(content, max_len)))
    }
}

/// Produce the decoded text of a string field.
///
/// Walks the content as modified UTF-8: each lead byte selects a 1-4 byte
/// sequence that is copied as one unit. The scan is bounded by the declared
/// field extent; a sequence that would cross the boundary is truncated at
/// it rather than extended past it.
fn scan_modified_utf8(content: &[u8], max_len: usize) -> String {
    let mut out: Vec<u8> = Vec::with_capacity(content.len().min(max_len));
    let mut pos = 0;
    while pos < content.len() {
        let lead = content[pos];
        let mut width = 1;
        for mask in UTF8_LEAD_MASKS {
            if lead & mask == mask {
                width += 1;
            }
        }
        let end = (pos + width).min(content.len());
        for &byte in &content[pos..end] {
            if out.len() < max_len {
                out.push(byte);
            }
        }
        pos += width;
    }
    String::from_utf8_lossy(&out).into_owned()
}

//! Shared helpers for building synthetic manifest streams.

// Each test binary compiles its own copy and uses a subset of the helpers.
#![allow(dead_code)]

use unback::manifest::{ManifestRecord, Property};

/// Encode one string field: 2-byte big-endian length plus content, or the
/// 0xFFFF absent sentinel.
pub fn push_string(buf: &mut Vec<u8>, value: Option<&str>) {
    match value {
        None => buf.extend_from_slice(&[0xFF, 0xFF]),
        Some(s) => {
            buf.extend_from_slice(&(s.len() as u16).to_be_bytes());
            buf.extend_from_slice(s.as_bytes());
        }
    }
}

/// Encode one record with the declared field widths.
pub fn encode_record(buf: &mut Vec<u8>, record: &ManifestRecord) {
    push_string(buf, Some(&record.domain));
    push_string(buf, Some(&record.relative_path));
    push_string(buf, record.link_target.as_deref());
    push_string(buf, record.digest.as_deref());
    push_string(buf, record.encryption_key.as_deref());
    buf.extend_from_slice(&record.mode.to_be_bytes());
    buf.extend_from_slice(&record.inode.to_be_bytes());
    buf.extend_from_slice(&record.user_id.to_be_bytes());
    buf.extend_from_slice(&record.group_id.to_be_bytes());
    buf.extend_from_slice(&record.mtime.to_be_bytes());
    buf.extend_from_slice(&record.atime.to_be_bytes());
    buf.extend_from_slice(&record.ctime.to_be_bytes());
    buf.extend_from_slice(&record.size.to_be_bytes());
    buf.push(record.protection_class);
    buf.push(record.properties.len() as u8);
    for property in &record.properties {
        push_string(buf, property.name.as_deref());
        push_string(buf, property.value.as_deref());
    }
}

/// A full manifest buffer: six-byte prologue plus the given records.
pub fn manifest_bytes(records: &[ManifestRecord]) -> Vec<u8> {
    let mut buf = b"mbdb\x05\x00".to_vec();
    for record in records {
        encode_record(&mut buf, record);
    }
    buf
}

/// A minimal record; callers adjust the fields they care about.
pub fn record(domain: &str, relative_path: &str, mode: u16) -> ManifestRecord {
    ManifestRecord {
        domain: domain.to_string(),
        relative_path: relative_path.to_string(),
        link_target: None,
        digest: None,
        encryption_key: None,
        mode,
        inode: 1,
        user_id: 501,
        group_id: 501,
        mtime: 0,
        atime: 0,
        ctime: 0,
        size: 0,
        protection_class: 0,
        properties: Vec::new(),
    }
}

pub fn property(name: Option<&str>, value: Option<&str>) -> Property {
    Property {
        name: name.map(str::to_string),
        value: value.map(str::to_string),
    }
}

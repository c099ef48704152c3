//! Verbosity-gated reporting surface.
//!
//! All user-facing per-record output funnels through here: the record
//! summary line, the property dump, and the per-file outcome. The sink is
//! injected so tests can capture output; write failures on the report
//! stream are deliberately not escalated into the pipeline.

use crate::manifest::ManifestRecord;
use crate::restore::Outcome;
use std::io::{self, Write};

/// Report detail, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No per-record output at all.
    Quiet,
    /// Per-file outcomes only.
    Normal,
    /// Outcomes plus the pipe-separated record summary.
    Verbose,
    /// Everything, including the property key/value dump.
    Full,
}

impl Verbosity {
    /// Quiet wins over any number of `-v` flags.
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            Verbosity::Quiet
        } else {
            match verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Full,
            }
        }
    }
}

pub struct Reporter<W: Write> {
    verbosity: Verbosity,
    json: bool,
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout(verbosity: Verbosity, json: bool) -> Self {
        Reporter::new(verbosity, json, io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(verbosity: Verbosity, json: bool, out: W) -> Self {
        Reporter {
            verbosity,
            json,
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Emit the decoded record: one JSON line in JSON mode, otherwise the
    /// pipe-separated field summary at `-v`, with properties at `-vv`.
    pub fn record(&mut self, record: &ManifestRecord) {
        if self.verbosity == Verbosity::Quiet {
            return;
        }
        if self.json {
            let line = serde_json::json!({
                "kind": record.kind(),
                "entry": record,
            });
            let _ = writeln!(self.out, "{}", line);
            return;
        }
        if self.verbosity < Verbosity::Verbose {
            return;
        }
        let _ = writeln!(self.out, "{}", summary_line(record));
        if self.verbosity >= Verbosity::Full {
            for property in &record.properties {
                let _ = writeln!(
                    self.out,
                    "\t{}={}",
                    property.name.as_deref().unwrap_or(""),
                    property.value.as_deref().unwrap_or("")
                );
            }
        }
    }

    /// Emit the per-file outcome line. Missing blobs are only reported at
    /// `-v` and above; JSON mode carries the outcome in the record line
    /// instead.
    pub fn outcome(&mut self, record: &ManifestRecord, outcome: &Outcome) {
        if self.verbosity == Verbosity::Quiet || self.json {
            return;
        }
        match outcome {
            Outcome::Copied { key, bytes } => {
                let _ = writeln!(
                    self.out,
                    "FILE: {} => {} copied ({} bytes)",
                    key, record.relative_path, bytes
                );
            }
            Outcome::WouldCopy { key } => {
                let _ = writeln!(
                    self.out,
                    "FILE: {} => {} would copy (decode-only)",
                    key, record.relative_path
                );
            }
            Outcome::NotPresent { key } => {
                if self.verbosity >= Verbosity::Verbose {
                    let _ = writeln!(
                        self.out,
                        "FILE: {} => {} not present",
                        key, record.relative_path
                    );
                }
            }
            Outcome::Failed { key, error } => {
                let _ = writeln!(
                    self.out,
                    "FILE: {} => {} failed: {}",
                    key, record.relative_path, error
                );
            }
            Outcome::Directory => {
                let _ = writeln!(self.out, "DIR: {}-{}", record.domain, record.relative_path);
            }
            Outcome::Symlink => {
                let _ = writeln!(self.out, "LINK: {}-{}", record.domain, record.relative_path);
            }
            Outcome::Unknown => {
                if self.verbosity >= Verbosity::Verbose {
                    let _ = writeln!(
                        self.out,
                        "SKIP: {}-{} (mode {:04x})",
                        record.domain, record.relative_path, record.mode
                    );
                }
            }
        }
    }
}

/// Pipe-separated field summary matching the classic decoder output:
/// strings, rwx bits, ids, times, size, protection flags, property count.
fn summary_line(record: &ManifestRecord) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}{}{}|{}|uid:{} gid:{}|times({},{},{})|size:{}|flags:{:02x}|props:{}",
        record.domain,
        record.relative_path,
        record.link_target.as_deref().unwrap_or(""),
        record.digest.as_deref().unwrap_or(""),
        record.encryption_key.as_deref().unwrap_or(""),
        if record.mode & 0x4 != 0 { 'r' } else { '-' },
        if record.mode & 0x2 != 0 { 'w' } else { '-' },
        if record.mode & 0x1 != 0 { 'x' } else { '-' },
        record.inode,
        record.user_id,
        record.group_id,
        record.mtime,
        record.atime,
        record.ctime,
        record.size,
        record.protection_class,
        record.properties.len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::BlobKey;
    use crate::manifest::Property;

    fn sample_record() -> ManifestRecord {
        ManifestRecord {
            domain: "AppDomain".to_string(),
            relative_path: "Library/file.txt".to_string(),
            link_target: None,
            digest: None,
            encryption_key: None,
            mode: 0x81A4,
            inode: 7,
            user_id: 501,
            group_id: 501,
            mtime: 3,
            atime: 2,
            ctime: 1,
            size: 12,
            protection_class: 0,
            properties: vec![Property {
                name: Some("owner".to_string()),
                value: Some("mobile".to_string()),
            }],
        }
    }

    fn rendered<F: FnOnce(&mut Reporter<Vec<u8>>)>(
        verbosity: Verbosity,
        json: bool,
        emit: F,
    ) -> String {
        let mut reporter = Reporter::new(verbosity, json, Vec::new());
        emit(&mut reporter);
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, 3), Verbosity::Full);
        // -q beats -vvv
        assert_eq!(Verbosity::from_flags(true, 3), Verbosity::Quiet);
    }

    #[test]
    fn test_summary_only_at_verbose() {
        let record = sample_record();
        let quiet = rendered(Verbosity::Normal, false, |r| r.record(&record));
        assert!(quiet.is_empty());

        let verbose = rendered(Verbosity::Verbose, false, |r| r.record(&record));
        assert!(verbose.starts_with("AppDomain|Library/file.txt|"));
        assert!(verbose.contains("|r--|"));
        assert!(verbose.contains("uid:501 gid:501"));
        assert!(!verbose.contains("owner=mobile"));

        let full = rendered(Verbosity::Full, false, |r| r.record(&record));
        assert!(full.contains("\towner=mobile\n"));
    }

    #[test]
    fn test_outcome_lines() {
        let record = sample_record();
        let key = BlobKey::for_record(&record);

        let copied = rendered(Verbosity::Normal, false, |r| {
            r.outcome(&record, &Outcome::Copied { key, bytes: 12 })
        });
        assert_eq!(
            copied,
            format!("FILE: {} => Library/file.txt copied (12 bytes)\n", key)
        );

        // Missing blobs stay silent below verbose.
        let missing = rendered(Verbosity::Normal, false, |r| {
            r.outcome(&record, &Outcome::NotPresent { key })
        });
        assert!(missing.is_empty());
        let missing = rendered(Verbosity::Verbose, false, |r| {
            r.outcome(&record, &Outcome::NotPresent { key })
        });
        assert!(missing.contains("not present"));

        let dir = rendered(Verbosity::Normal, false, |r| {
            r.outcome(&record, &Outcome::Directory)
        });
        assert_eq!(dir, "DIR: AppDomain-Library/file.txt\n");
    }

    #[test]
    fn test_quiet_suppresses_everything() {
        let record = sample_record();
        let key = BlobKey::for_record(&record);
        let out = rendered(Verbosity::Quiet, false, |r| {
            r.record(&record);
            r.outcome(&record, &Outcome::Copied { key, bytes: 1 });
        });
        assert!(out.is_empty());
    }

    #[test]
    fn test_json_mode_emits_one_line_per_record() {
        let record = sample_record();
        let out = rendered(Verbosity::Normal, true, |r| r.record(&record));
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["kind"], "file");
        assert_eq!(value["entry"]["domain"], "AppDomain");
        assert_eq!(value["entry"]["mode"], 0x81A4);
    }
}

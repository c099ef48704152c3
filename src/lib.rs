//! Unback: flattened mobile-backup tree recovery.
//!
//! Decodes the binary `Manifest.mbdb` index of a device backup and copies
//! each content-addressed blob back to its original relative path under an
//! output root.

pub mod address;
pub mod cli;
pub mod config;
pub mod error;
pub mod fsops;
pub mod logging;
pub mod manifest;
pub mod report;
pub mod restore;

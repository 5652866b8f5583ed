//! Serializes reviewed records back into hosts-file text.
//!
//! Rendering is pure; the single whole-buffer write happens separately
//! so the text can be asserted on without touching a filesystem.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use har2hosts_common::model::DomainRecord;

use crate::error::{Error, Result};

/// Renders the selected entries of a sorted view.
///
/// One header line naming the traffic-log source, one blank line, then
/// `<address> <hostname>` per selected entry, records in view order and
/// entries in insertion order. Deselected entries are dropped outright
/// rather than commented out; a record with nothing selected contributes
/// no lines. Rendering an unmodified view twice is byte-identical.
pub fn render(records: &[DomainRecord], source_label: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Generated from HAR file: {source_label}\n");

    for record in records {
        for entry in record.ip_entries.iter().filter(|entry| entry.selected) {
            let _ = writeln!(out, "{} {}", entry.address, record.hostname);
        }
    }

    out
}

/// Writes the rendered buffer in one shot, replacing any existing file
/// at `path` without confirmation.
pub fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

//! Line-oriented reader for the system hosts file.
//!
//! Only the first two whitespace-separated fields of a line matter:
//! `<ip> <hostname>`. Aliases after the hostname, comment lines, blank
//! lines and anything that does not split into two fields are skipped
//! without a word; best effort is the policy for individual lines.

use std::fs;
use std::path::Path;

/// One `(ip, hostname)` pair taken from a hosts-file line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostsRecord {
    pub ip: String,
    pub hostname: String,
}

/// Reads and parses `path`, returning records in file order.
///
/// Open and read failures are the caller's to handle: a missing hosts
/// file downgrades to a warning and the merge proceeds without it.
pub fn read(path: &Path) -> std::io::Result<Vec<HostsRecord>> {
    Ok(parse(&fs::read_to_string(path)?))
}

/// Parses hosts-file text into records, in line order.
pub fn parse(content: &str) -> Vec<HostsRecord> {
    let mut records = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(ip), Some(hostname)) = (fields.next(), fields.next()) else {
            continue;
        };

        records.push(HostsRecord {
            ip: ip.to_string(),
            hostname: hostname.to_string(),
        });
    }

    records
}

//! Row formatting for the review screen.
//!
//! Pure string builders, one per record shape, so the exact list text is
//! testable without a terminal.

use har2hosts_common::model::{DomainRecord, IpEntry};
use unicode_width::UnicodeWidthStr;

/// Formats one record the way it appears in the list.
///
/// * placeholder record: `[✓] host (new: 0.0.0.0)`
/// * single mapping: `[✓] host (1.2.3.4)`
/// * multiple mappings: `[1/2] host (2 IPs: *1.2.3.4, 5.6.7.8)`
pub fn row(record: &DomainRecord) -> String {
    match record.ip_entries.as_slice() {
        [only] if record.synthesized => {
            format!("{} {} (new: {})", checkbox(only), record.hostname, only.address)
        }
        [only] => format!("{} {} ({})", checkbox(only), record.hostname, only.address),
        entries => multi_ip_row(record, entries),
    }
}

/// Clips a line to the terminal width, display columns rather than bytes.
pub fn clip(line: &str, width: usize) -> String {
    if UnicodeWidthStr::width(line) <= width {
        line.to_string()
    } else {
        console::truncate_str(line, width, "").into_owned()
    }
}

fn checkbox(entry: &IpEntry) -> &'static str {
    if entry.selected { "[✓]" } else { "[ ]" }
}

fn multi_ip_row(record: &DomainRecord, entries: &[IpEntry]) -> String {
    let addresses: Vec<String> = entries
        .iter()
        .map(|entry| {
            if entry.selected {
                format!("*{}", entry.address)
            } else {
                entry.address.clone()
            }
        })
        .collect();

    format!(
        "[{}/{}] {} ({} IPs: {})",
        record.selected_count(),
        entries.len(),
        record.hostname,
        entries.len(),
        addresses.join(", ")
    )
}

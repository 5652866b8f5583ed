//! # Domain Model
//!
//! The shared types the registry, selection engine, serializer and review
//! screen all operate on. A [`DomainRecord`] is one hostname together with
//! every IP candidate observed for it; records live for the whole session
//! and only their selection flags ever change.

/// Address given to hostnames that were seen in traffic but have no
/// mapping in the hosts file yet.
pub const PLACEHOLDER_ADDRESS: &str = "0.0.0.0";

/// One IP-address candidate for a domain.
///
/// The address is an uninterpreted token; nothing checks that it is a
/// well-formed IP.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IpEntry {
    pub address: String,
    /// Whether this address is included when the session is serialized.
    pub selected: bool,
}

impl IpEntry {
    /// New entries always start selected.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            selected: true,
        }
    }
}

/// Which source contributed a record.
///
/// A hostname present in both sources keeps [`Provenance::HostsFile`];
/// the traffic-log occurrence is absorbed without a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provenance {
    /// Parsed from the system hosts file.
    HostsFile,
    /// Extracted from the captured HAR log.
    HarLog,
}

/// One hostname and all its known IP candidates.
///
/// `ip_entries` keeps first-observed order and is never reordered or
/// deduplicated; duplicate lines in the hosts file coexist as duplicate
/// entries. It is never empty once the record exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainRecord {
    /// Unique key, case-sensitive as found in the source.
    pub hostname: String,
    pub provenance: Provenance,
    /// True when the sole entry is the placeholder synthesized for a
    /// hostname only seen in traffic.
    pub synthesized: bool,
    pub ip_entries: Vec<IpEntry>,
}

impl DomainRecord {
    /// Record for a hostname first seen on a hosts-file line.
    pub fn from_hosts(hostname: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            provenance: Provenance::HostsFile,
            synthesized: false,
            ip_entries: vec![IpEntry::new(ip)],
        }
    }

    /// Placeholder record for a hostname only the traffic log knows.
    pub fn from_traffic(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            provenance: Provenance::HarLog,
            synthesized: true,
            ip_entries: vec![IpEntry::new(PLACEHOLDER_ADDRESS)],
        }
    }

    /// Number of entries currently selected for output.
    pub fn selected_count(&self) -> usize {
        self.ip_entries.iter().filter(|entry| entry.selected).count()
    }
}

//! # Domain Registry
//!
//! Merges the two record sources into one hostname-keyed store.
//!
//! Merge rules, in order:
//! * Hosts-file pairs are applied first, in file order. A repeated
//!   hostname accumulates additional IP entries; nothing is overwritten.
//! * Traffic-log hostnames only contribute *new* domains. A hostname the
//!   hosts file already maps is absorbed silently, keeping the hosts-file
//!   provenance and entries intact.
//! * A traffic-only hostname gets a single placeholder entry so it can be
//!   reviewed and written out like any other mapping.

use std::collections::HashMap;

use har2hosts_common::model::{DomainRecord, IpEntry};

use crate::readers::hosts::HostsRecord;

/// Hostname-keyed store built by [`Registry::build`].
///
/// The map's own iteration order carries no meaning; every exported view
/// goes through the explicit sort in [`Registry::into_sorted`].
#[derive(Debug, Default)]
pub struct Registry {
    records: HashMap<String, DomainRecord>,
}

impl Registry {
    /// Merges hosts-file records and traffic-log hostnames.
    ///
    /// Empty inputs are fine; an empty registry is a valid result.
    pub fn build(hosts_records: Vec<HostsRecord>, traffic_hostnames: Vec<String>) -> Self {
        let mut registry = Self::default();

        for record in hosts_records {
            registry.add_hosts_record(record);
        }
        for hostname in traffic_hostnames {
            registry.add_traffic_hostname(hostname);
        }

        registry
    }

    /// Consumes the registry into the hostname-sorted view the session
    /// owns. Ascending lexicographic, deterministic for identical input.
    pub fn into_sorted(self) -> Vec<DomainRecord> {
        let mut records: Vec<DomainRecord> = self.records.into_values().collect();
        records.sort_by(|a, b| a.hostname.cmp(&b.hostname));
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, hostname: &str) -> Option<&DomainRecord> {
        self.records.get(hostname)
    }

    fn add_hosts_record(&mut self, record: HostsRecord) {
        match self.records.get_mut(&record.hostname) {
            Some(existing) => existing.ip_entries.push(IpEntry::new(record.ip)),
            None => {
                self.records.insert(
                    record.hostname.clone(),
                    DomainRecord::from_hosts(record.hostname, record.ip),
                );
            }
        }
    }

    fn add_traffic_hostname(&mut self, hostname: String) {
        self.records
            .entry(hostname)
            .or_insert_with_key(|key| DomainRecord::from_traffic(key.clone()));
    }
}

//! End-to-end coverage: fixture files through the readers, the merge, the
//! selection engine and the serializer, asserting on exact output bytes.

use std::fs;

use har2hosts_common::model::Provenance;
use har2hosts_core::readers::{har, hosts};
use har2hosts_core::{Registry, output, selection};

use crate::fixtures::{HAR_FIXTURE, HOSTS_FIXTURE};

fn build_session() -> Vec<har2hosts_common::model::DomainRecord> {
    let dir = tempfile::tempdir().unwrap();
    let hosts_path = dir.path().join("hosts");
    let har_path = dir.path().join("capture.har");
    fs::write(&hosts_path, HOSTS_FIXTURE).unwrap();
    fs::write(&har_path, HAR_FIXTURE).unwrap();

    let hosts_records = hosts::read(&hosts_path).unwrap();
    let har = har::read(&har_path).unwrap();

    Registry::build(hosts_records, har::hostnames(&har)).into_sorted()
}

/*************************************************************
                    Merge across both sources
**************************************************************/

#[test]
fn merged_view_is_sorted_and_deduplicated_by_hostname() {
    let records = build_session();

    let hostnames: Vec<&str> = records
        .iter()
        .map(|record| record.hostname.as_str())
        .collect();
    assert_eq!(
        hostnames,
        [
            "ads.example.com",
            "localhost",
            "localhost.localdomain",
            "myserver",
            "tracker.example.net",
        ]
    );
}

#[test]
fn hosts_entries_win_over_traffic_occurrences() {
    let records = build_session();

    // ads.example.com is in both sources; the hosts-file mapping survives
    // untouched and no placeholder is added.
    let ads = records
        .iter()
        .find(|record| record.hostname == "ads.example.com")
        .unwrap();
    assert_eq!(ads.provenance, Provenance::HostsFile);
    assert!(!ads.synthesized);
    assert_eq!(ads.ip_entries.len(), 1);
    assert_eq!(ads.ip_entries[0].address, "0.0.0.0");
}

#[test]
fn traffic_only_hostname_arrives_as_placeholder() {
    let records = build_session();

    let tracker = records
        .iter()
        .find(|record| record.hostname == "tracker.example.net")
        .unwrap();
    assert_eq!(tracker.provenance, Provenance::HarLog);
    assert!(tracker.synthesized);
    assert_eq!(tracker.ip_entries.len(), 1);
    assert_eq!(tracker.ip_entries[0].address, "0.0.0.0");
}

#[test]
fn duplicate_hosts_lines_accumulate() {
    let records = build_session();

    let myserver = records
        .iter()
        .find(|record| record.hostname == "myserver")
        .unwrap();
    let addresses: Vec<&str> = myserver
        .ip_entries
        .iter()
        .map(|entry| entry.address.as_str())
        .collect();
    assert_eq!(addresses, ["192.168.1.1", "192.168.1.2"]);
}

/*************************************************************
                 Toggling and serialization
**************************************************************/

#[test]
fn reference_scenario_renders_expected_bytes() {
    let hosts_records = hosts::parse(
        "127.0.0.1 localhost\n192.168.1.1 myserver\n192.168.1.2 myserver\n",
    );
    let mut records =
        Registry::build(hosts_records, vec!["ads.example.com".to_string()]).into_sorted();

    // The operator deselects just the second myserver mapping.
    let myserver = records
        .iter_mut()
        .find(|record| record.hostname == "myserver")
        .unwrap();
    myserver.ip_entries[1].selected = false;

    let text = output::render(&records, "test.har");
    assert_eq!(
        text,
        "# Generated from HAR file: test.har\n\n0.0.0.0 ads.example.com\n127.0.0.1 localhost\n192.168.1.1 myserver\n"
    );
}

#[test]
fn toggled_off_domain_disappears_from_output_but_not_the_view() {
    let mut records = build_session();

    let idx = records
        .iter()
        .position(|record| record.hostname == "tracker.example.net")
        .unwrap();
    selection::toggle_at(&mut records, idx);

    let text = output::render(&records, "capture.har");
    assert!(!text.contains("tracker.example.net"));
    assert_eq!(records.len(), 5);

    // Toggling back restores the line.
    selection::toggle_at(&mut records, idx);
    assert!(output::render(&records, "capture.har").contains("0.0.0.0 tracker.example.net\n"));
}

#[test]
fn group_toggle_empties_a_multi_ip_domain_in_one_action() {
    let mut records = build_session();

    let idx = records
        .iter()
        .position(|record| record.hostname == "myserver")
        .unwrap();
    selection::toggle_at(&mut records, idx);

    let text = output::render(&records, "capture.har");
    assert!(!text.contains("myserver"));
}

#[test]
fn render_is_stable_across_repeated_calls() {
    let records = build_session();
    assert_eq!(
        output::render(&records, "capture.har"),
        output::render(&records, "capture.har")
    );
}

#[test]
fn commit_overwrites_a_previous_output_file() {
    let records = build_session();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hosts.txt");
    fs::write(&path, "# old run\n").unwrap();

    let rendered = output::render(&records, "capture.har");
    output::write(&path, &rendered).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), rendered);
}

/*************************************************************
                  Cursor over the merged view
**************************************************************/

#[test]
fn cursor_stays_inside_the_view_walking_both_ways() {
    let records = build_session();
    let len = records.len();

    let mut cursor = 0;
    for _ in 0..(len + 5) {
        cursor = selection::move_cursor(cursor, 1, len);
    }
    assert_eq!(cursor, len - 1);

    for _ in 0..(len + 5) {
        cursor = selection::move_cursor(cursor, -1, len);
    }
    assert_eq!(cursor, 0);
}

use std::path::Path;

use har2hosts_common::{config::Config, info, success, warn};
use har2hosts_core::readers::{har, hosts};
use har2hosts_core::{Registry, output};

use crate::terminal::ui::{self, Outcome};

/// Runs one review session: merge both sources, hand the list to the
/// interactive screen, and serialize on commit.
pub fn review(har_path: &Path, cfg: &Config) -> anyhow::Result<()> {
    // An unreadable HAR file is fatal; an unreadable hosts file is not.
    let har = har::read(har_path)?;

    let hosts_records = match hosts::read(&cfg.hosts_path) {
        Ok(records) => records,
        Err(err) => {
            warn!("could not read {}: {err}", cfg.hosts_path.display());
            Vec::new()
        }
    };

    let registry = Registry::build(hosts_records, har::hostnames(&har));
    let mut records = registry.into_sorted();

    let label = har_path.display().to_string();
    match ui::run(&mut records)? {
        Outcome::Commit => {
            let rendered = output::render(&records, &label);
            output::write(&cfg.output_path, &rendered)?;

            let kept: usize = records.iter().map(|record| record.selected_count()).sum();
            success!(
                "created {} with {kept} mappings",
                cfg.output_path.display()
            );
        }
        Outcome::Quit => {
            info!("session ended without writing");
        }
    }

    Ok(())
}

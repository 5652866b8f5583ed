//! Reader for captured HAR (HTTP Archive) traffic logs.
//!
//! Only the request URLs are of interest. Every level of the document
//! defaults when absent, so a sparse-but-valid JSON file simply yields
//! zero hostnames; a file that is not JSON at all is fatal to the run.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

/// Top-level HAR document.
#[derive(Debug, Default, Deserialize)]
pub struct Har {
    #[serde(default)]
    pub log: HarLog,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarLog {
    #[serde(default)]
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarEntry {
    #[serde(default)]
    pub request: HarRequest,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarRequest {
    #[serde(default)]
    pub url: String,
}

/// Reads and parses a HAR file. Both failure modes abort the run before
/// any interactive session starts.
pub fn read(path: &Path) -> Result<Har> {
    let data = fs::read_to_string(path).map_err(|source| Error::HarRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&data)?)
}

/// Extracts request hostnames in first-seen order.
///
/// Unparsable URLs and URLs without a host are skipped per entry.
/// Duplicates are kept; the registry merge is idempotent for hostnames
/// it already holds.
pub fn hostnames(har: &Har) -> Vec<String> {
    har.log
        .entries
        .iter()
        .filter_map(|entry| Url::parse(&entry.request.url).ok())
        .filter_map(|url| url.host_str().map(str::to_string))
        .collect()
}

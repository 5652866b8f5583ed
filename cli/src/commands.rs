pub mod review;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "har2hosts")]
#[command(about = "Review captured HAR traffic against the hosts file and write a reconciled copy.")]
pub struct CommandLine {
    /// Path to the captured HAR file
    pub har_file: PathBuf,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

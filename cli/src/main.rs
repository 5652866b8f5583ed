mod commands;
mod terminal;

use commands::{CommandLine, review};
use har2hosts_common::config::Config;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config::default();

    review::review(&commands.har_file, &cfg)
}

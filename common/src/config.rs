use std::path::PathBuf;

/// System hosts file consulted for existing mappings.
pub const HOSTS_PATH: &str = "/etc/hosts";

/// Destination the reconciled mappings are written to, relative to the
/// working directory. There is no flag to change it.
pub const OUTPUT_PATH: &str = "hosts.txt";

/// Paths a review session works against.
///
/// The defaults are the real system hosts file and `hosts.txt`; tests
/// point both at temporary locations.
pub struct Config {
    pub hosts_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hosts_path: PathBuf::from(HOSTS_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}

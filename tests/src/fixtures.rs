//! Shared fixtures for the integration suite.

/// Hosts file with a comment, a blank line, a duplicate-hostname pair and
/// an already-blocked domain.
pub const HOSTS_FIXTURE: &str = "\
# Comment line
127.0.0.1 localhost
127.0.0.1 localhost.localdomain

192.168.1.1 myserver
192.168.1.2 myserver
0.0.0.0 ads.example.com
";

/// HAR capture referencing one hostname the fixture hosts file already
/// maps (`ads.example.com`) and one it does not (`tracker.example.net`).
pub const HAR_FIXTURE: &str = r#"{
    "log": {
        "entries": [
            { "request": { "url": "https://ads.example.com/banner.js" } },
            { "request": { "url": "https://tracker.example.net/pixel" } },
            { "request": { "url": "not a url at all" } },
            { "request": { "url": "https://tracker.example.net/other" } }
        ]
    }
}"#;

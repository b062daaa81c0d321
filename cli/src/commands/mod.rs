//! Subcommand implementations.

pub mod config;
pub mod create;
pub mod list;
pub mod serve;

use std::path::PathBuf;

use consignment_core::ConfigStore;

/// Where client commands look for a running service by default.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:50051";

/// Config store at `path`, or at the default location.
pub fn config_store(path: Option<PathBuf>) -> consignment_core::Result<ConfigStore> {
    match path {
        Some(path) => Ok(ConfigStore::with_path(path)),
        None => ConfigStore::new(),
    }
}

/// URL of the consignments collection on `server`.
pub fn consignments_url(server: &str) -> String {
    format!("{}/consignments", server.trim_end_matches('/'))
}

/// Shorten `s` to at most `max` characters.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long description", 6), "a lon…");
    }

    #[test]
    fn test_consignments_url() {
        assert_eq!(
            consignments_url("http://localhost:50051/"),
            "http://localhost:50051/consignments"
        );
    }
}

//! Where documentation pages come from.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://sdformat.org/spec/1.12/".to_string()
}

fn default_root_element() -> String {
    "model".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("sdfo/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Default number of pages fetched and extracted at once.
const fn default_concurrency() -> usize {
    4
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Base URL of the specification; element pages live at `{base_url}{name}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Element whose page provides the primary tree.
    #[serde(default = "default_root_element")]
    pub root_element: String,

    /// HTTP request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of pages in flight.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl SourceConfig {
    /// URL of the documentation page for `element`.
    #[must_use]
    pub fn element_url(&self, element: &str) -> String {
        if self.base_url.ends_with('/') {
            format!("{}{element}", self.base_url)
        } else {
            format!("{}/{element}", self.base_url)
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            root_element: default_root_element(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            concurrency: default_concurrency(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = SourceConfig::default();
        assert_eq!(config.base_url, "https://sdformat.org/spec/1.12/");
        assert_eq!(config.root_element, "model");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.concurrency, 4);
        assert!(config.user_agent.starts_with("sdfo/"));
    }

    #[test]
    fn element_url_joins_with_single_slash() {
        let mut config = SourceConfig::default();
        assert_eq!(
            config.element_url("link"),
            "https://sdformat.org/spec/1.12/link"
        );
        config.base_url = "http://localhost:8080/spec".to_string();
        assert_eq!(config.element_url("joint"), "http://localhost:8080/spec/joint");
    }
}

//! Structural merge settings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_targets() -> Vec<String> {
    [
        "link",
        "joint",
        "sensor",
        "light",
        "actor",
        "collision",
        "visual",
        "inertial",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Default descent bound for the merge depth guard.
const fn default_max_depth() -> usize {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MergeConfig {
    /// Elements whose own pages are fetched as auxiliary trees.
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,

    /// Branches deeper than this are cut off and reported.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Element name -> parent names under which it may be expanded.
    /// Names without a rule expand everywhere. Unset means the built-in
    /// rules of the merger (`joint` under model/world, `link` under model).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_rules: Option<BTreeMap<String, Vec<String>>>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            targets: default_targets(),
            max_depth: default_max_depth(),
            context_rules: None,
        }
    }
}

//! Structural merge of per-element pages into the primary tree.
//!
//! The primary page (`model`) lists `link`, `joint`, ... as childless
//! placeholders; their full subtrees live on their own pages. Merging grafts
//! a fresh copy of each auxiliary subtree onto every eligible placeholder.

use std::collections::{BTreeMap, HashMap};

use sdf_core::{Forest, Node, NodeKind};
use serde::Serialize;

/// Context name given to forest roots.
pub const ROOT_CONTEXT: &str = "root";

/// Default bound for the depth guard.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Auxiliary forests keyed by element name.
pub type AuxiliaryForests = HashMap<String, Forest>;

/// Decides whether a placeholder may be expanded in a given parent context.
///
/// Names with a rule expand only under the listed parent names; every other
/// name expands wherever it appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionPolicy {
    rules: BTreeMap<String, Vec<String>>,
}

impl ExpansionPolicy {
    #[must_use]
    pub const fn new(rules: BTreeMap<String, Vec<String>>) -> Self {
        Self { rules }
    }

    /// Policy that expands every matching name.
    #[must_use]
    pub const fn unrestricted() -> Self {
        Self::new(BTreeMap::new())
    }

    #[must_use]
    pub fn allows(&self, name: &str, context: &str) -> bool {
        self.rules
            .get(name)
            .is_none_or(|parents| parents.iter().any(|p| p == context))
    }
}

impl Default for ExpansionPolicy {
    /// `joint` under model/world, `link` under model; roots count as both.
    fn default() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(
            "joint".to_string(),
            vec!["model".to_string(), "world".to_string(), ROOT_CONTEXT.to_string()],
        );
        rules.insert(
            "link".to_string(),
            vec!["model".to_string(), ROOT_CONTEXT.to_string()],
        );
        Self::new(rules)
    }
}

/// What a merge changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Placeholders that received an auxiliary subtree.
    pub expanded: usize,
    /// Slash-separated paths where the depth guard stopped descent.
    pub truncated: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub forest: Forest,
    pub report: MergeReport,
}

#[derive(Debug, Clone)]
pub struct Merger {
    policy: ExpansionPolicy,
    max_depth: usize,
}

impl Default for Merger {
    fn default() -> Self {
        Self::new(ExpansionPolicy::default(), DEFAULT_MAX_DEPTH)
    }
}

impl Merger {
    #[must_use]
    pub const fn new(policy: ExpansionPolicy, max_depth: usize) -> Self {
        Self { policy, max_depth }
    }

    /// Merge `auxiliary` into `primary`.
    ///
    /// Walks each tree in document order with the parent name as context.
    /// An `Element` placeholder (no children) whose name has a non-empty
    /// auxiliary forest, and which the policy allows in its context,
    /// receives a deep copy of the first auxiliary root's children. Its
    /// description is filled from that root when empty. Nodes that already
    /// have children are never touched. Descent continues into grafted
    /// children, so nested placeholders expand too; branches deeper than
    /// `max_depth` are cut and reported instead.
    #[must_use]
    pub fn merge(&self, mut primary: Forest, auxiliary: &AuxiliaryForests) -> MergeOutcome {
        let mut report = MergeReport::default();
        for root in &mut primary {
            self.visit(root, ROOT_CONTEXT, "", 0, auxiliary, &mut report);
        }

        tracing::debug!(
            expanded = report.expanded,
            truncated = report.truncated.len(),
            "merge finished"
        );
        MergeOutcome {
            forest: primary,
            report,
        }
    }

    fn visit(
        &self,
        node: &mut Node,
        context: &str,
        parent_path: &str,
        depth: usize,
        auxiliary: &AuxiliaryForests,
        report: &mut MergeReport,
    ) {
        let path = format!("{parent_path}/{}", node.name);
        if depth > self.max_depth {
            tracing::warn!(%path, max_depth = self.max_depth, "merge depth limit reached");
            report.truncated.push(path);
            return;
        }

        if self.should_expand(node, context) {
            if let Some(source) = auxiliary.get(&node.name).and_then(|forest| forest.first()) {
                node.children.clone_from(&source.children);
                if node.description.is_empty() {
                    node.description.clone_from(&source.description);
                }
                report.expanded += 1;
                tracing::trace!(%path, children = node.children.len(), "expanded placeholder");
            }
        }

        for child in &mut node.children {
            self.visit(child, &node.name, &path, depth + 1, auxiliary, report);
        }
    }

    fn should_expand(&self, node: &Node, context: &str) -> bool {
        node.node_type == NodeKind::Element
            && node.is_leaf()
            && self.policy.allows(&node.name, context)
    }
}

/// Merge with the default policy and depth bound.
#[must_use]
pub fn merge(primary: Forest, auxiliary: &AuxiliaryForests) -> Forest {
    Merger::default().merge(primary, auxiliary).forest
}

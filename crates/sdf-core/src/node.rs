//! The schema tree extracted from documentation pages.
//!
//! A [`Node`] is one element or attribute of the documented format. The
//! serialized shape (`name`, `node_type`, `details_raw`, `description`,
//! `children`) is a stable contract shared with other tools, so field names
//! and the two `node_type` spellings must not change.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Ordered collection of root nodes, each the root of its own tree.
pub type Forest = Vec<Node>;

/// Whether a node documents a child element or an attribute.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum NodeKind {
    #[default]
    Element,
    Attribute,
}

impl NodeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Element => "Element",
            Self::Attribute => "Attribute",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Element" => Ok(Self::Element),
            "Attribute" => Ok(Self::Attribute),
            other => Err(CoreError::Validation(format!(
                "unknown node_type '{other}' (expected Element or Attribute)"
            ))),
        }
    }
}

/// One schema element or attribute.
///
/// `name` is unique only among siblings. `details_raw` holds the unparsed
/// required/type/default blob exactly as it appeared on the page; it is
/// parsed lazily by the ontology stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Node {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub node_type: NodeKind,
    #[serde(default)]
    pub details_raw: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    /// A childless `Element` node with empty details.
    #[must_use]
    pub fn element(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A childless `Attribute` node with empty details.
    #[must_use]
    pub fn attribute(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_type: NodeKind::Attribute,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_details(mut self, details_raw: impl Into<String>) -> Self {
        self.details_raw = details_raw.into();
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[must_use]
    pub fn is_attribute(&self) -> bool {
        self.node_type == NodeKind::Attribute
    }

    /// First direct child with the given name.
    #[must_use]
    pub fn find_child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }

    /// Depth of the deepest descendant; a leaf has depth 1.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        1 + self.children.iter().map(Self::max_depth).max().unwrap_or(0)
    }
}

/// Find the first root named `name`.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] when no root carries that name.
pub fn find_root<'a>(forest: &'a [Node], name: &str) -> Result<&'a Node, CoreError> {
    forest
        .iter()
        .find(|n| n.name == name)
        .ok_or_else(|| CoreError::NotFound(name.to_string()))
}

/// Total number of nodes across a forest.
#[must_use]
pub fn forest_size(forest: &[Node]) -> usize {
    forest.iter().map(Node::count).sum()
}

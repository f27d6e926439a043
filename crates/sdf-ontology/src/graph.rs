//! OWL schema graph built from a merged forest.
//!
//! Complex nodes (with children) become classes joined to their parent class
//! by object properties; leaves become datatype properties on their parent
//! class. Identifiers only encode the immediate parent class, so two classes
//! with the same parent and leaf name share one declaration.

use std::collections::HashSet;

use sdf_core::{Node, NodeKind};
use serde::Serialize;

use crate::details::parse_details;
use crate::types::Primitive;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OntClass {
    pub id: String,
    pub comment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Object,
    Datatype,
}

/// Value side of a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Range {
    Class(String),
    Primitive(Primitive),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OntProperty {
    pub id: String,
    pub domain: String,
    pub range: Range,
    pub kind: PropertyKind,
    pub comment: String,
}

/// Classes and properties in declaration order.
///
/// Declaring an id that already exists is a no-op; the first declaration
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaGraph {
    classes: Vec<OntClass>,
    properties: Vec<OntProperty>,
    #[serde(skip)]
    class_ids: HashSet<String>,
    #[serde(skip)]
    property_ids: HashSet<String>,
}

impl SchemaGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph for every tree in `forest`.
    #[must_use]
    pub fn build(forest: &[Node]) -> Self {
        let mut graph = Self::new();
        for root in forest {
            graph.add_root(root);
        }
        tracing::debug!(
            classes = graph.classes.len(),
            properties = graph.properties.len(),
            "schema graph built"
        );
        graph
    }

    /// Returns `false` when the id was already declared.
    pub fn declare_class(&mut self, class: OntClass) -> bool {
        if !self.class_ids.insert(class.id.clone()) {
            return false;
        }
        self.classes.push(class);
        true
    }

    /// Returns `false` when the id was already declared.
    pub fn declare_property(&mut self, property: OntProperty) -> bool {
        if !self.property_ids.insert(property.id.clone()) {
            return false;
        }
        self.properties.push(property);
        true
    }

    #[must_use]
    pub fn classes(&self) -> &[OntClass] {
        &self.classes
    }

    #[must_use]
    pub fn properties(&self) -> &[OntProperty] {
        &self.properties
    }

    #[must_use]
    pub fn class(&self, id: &str) -> Option<&OntClass> {
        self.classes.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn property(&self, id: &str) -> Option<&OntProperty> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn properties_of_kind(&self, kind: PropertyKind) -> impl Iterator<Item = &OntProperty> {
        self.properties.iter().filter(move |p| p.kind == kind)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.properties.is_empty()
    }

    fn add_root(&mut self, root: &Node) {
        let class_id = sanitize(&capitalize(&root.name));
        self.declare_class(OntClass {
            id: class_id.clone(),
            comment: root.description.clone(),
        });
        for child in &root.children {
            self.add_node(child, &class_id);
        }
    }

    fn add_node(&mut self, node: &Node, parent_class: &str) {
        if node.is_leaf() {
            self.add_datatype_property(node, parent_class);
            return;
        }

        let leaf = capitalize(&node.name);
        let class_id = sanitize(&format!("{parent_class}_{leaf}"));
        self.declare_class(OntClass {
            id: class_id.clone(),
            comment: node.description.clone(),
        });

        let mut property_id = sanitize(&format!("{parent_class}_has_{leaf}"));
        if node.node_type == NodeKind::Attribute {
            property_id.push_str("_attr");
        }
        self.declare_property(OntProperty {
            id: property_id,
            domain: parent_class.to_string(),
            range: Range::Class(class_id.clone()),
            kind: PropertyKind::Object,
            comment: format!("Property for {} element", node.name),
        });

        for child in &node.children {
            self.add_node(child, &class_id);
        }
    }

    fn add_datatype_property(&mut self, node: &Node, parent_class: &str) {
        let mut property_id = sanitize(&format!("{parent_class}_{}", node.name));
        if node.node_type == NodeKind::Attribute {
            property_id.push_str("_attr");
        }
        let sdf_type = parse_details(&node.details_raw).type_name.unwrap_or_default();
        self.declare_property(OntProperty {
            id: property_id,
            domain: parent_class.to_string(),
            range: Range::Primitive(Primitive::from_sdf_type(&sdf_type)),
            kind: PropertyKind::Datatype,
            comment: node.description.clone(),
        });
    }
}

/// Build the schema graph for a forest.
#[must_use]
pub fn build(forest: &[Node]) -> SchemaGraph {
    SchemaGraph::build(forest)
}

/// First character upper-cased, the rest lower-cased (`frame_id` -> `Frame_id`).
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Replace everything outside `[A-Za-z0-9_]` with `_`.
#[must_use]
pub fn sanitize(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

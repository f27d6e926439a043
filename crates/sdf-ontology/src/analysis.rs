//! Structural summary of a schema graph.
//!
//! Classes are nodes and object properties are edges (domain -> range). The
//! layering groups classes by breadth-first distance from the root classes,
//! which is what a layered diagram of the ontology needs.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use rustworkx_core::connectivity::connected_components;
use rustworkx_core::petgraph::Direction;
use rustworkx_core::petgraph::algo::toposort;
use rustworkx_core::petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;

use crate::graph::{PropertyKind, Range, SchemaGraph};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub classes: usize,
    pub object_properties: usize,
    pub datatype_properties: usize,
    /// Weakly connected components of the class graph.
    pub components: usize,
    pub has_cycles: bool,
    /// Class ids by distance from the roots.
    pub layers: Vec<Vec<String>>,
}

/// Directed class graph in declaration order.
struct ClassGraph<'g> {
    graph: DiGraph<&'g str, &'g str>,
}

impl<'g> ClassGraph<'g> {
    fn new(schema: &'g SchemaGraph) -> Self {
        let mut graph = DiGraph::new();
        let mut index: HashMap<&str, NodeIndex> = HashMap::new();
        for class in schema.classes() {
            index.insert(class.id.as_str(), graph.add_node(class.id.as_str()));
        }
        for property in schema.properties_of_kind(PropertyKind::Object) {
            let Range::Class(target) = &property.range else {
                continue;
            };
            // Properties pointing outside the declared classes are skipped.
            if let (Some(&from), Some(&to)) =
                (index.get(property.domain.as_str()), index.get(target.as_str()))
            {
                graph.add_edge(from, to, property.id.as_str());
            }
        }
        Self { graph }
    }

    fn roots(&self) -> Vec<NodeIndex> {
        let roots: Vec<_> = self
            .graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .collect();
        if roots.is_empty() {
            self.graph.node_indices().take(1).collect()
        } else {
            roots
        }
    }

    fn layers(&self) -> Vec<Vec<String>> {
        let mut depth: HashMap<NodeIndex, usize> = HashMap::new();
        let mut order: Vec<NodeIndex> = Vec::new();
        let mut queue: VecDeque<NodeIndex> = VecDeque::new();

        for root in self.roots() {
            depth.insert(root, 0);
            order.push(root);
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            let next = depth[&node] + 1;
            // petgraph yields neighbors newest edge first.
            let mut children: Vec<_> = self.graph.neighbors(node).collect();
            children.reverse();
            for child in children {
                if let Entry::Vacant(slot) = depth.entry(child) {
                    slot.insert(next);
                    order.push(child);
                    queue.push_back(child);
                }
            }
        }

        let mut layers: Vec<Vec<String>> = Vec::new();
        for idx in order {
            let level = depth[&idx];
            if layers.len() <= level {
                layers.resize_with(level + 1, Vec::new);
            }
            layers[level].push(self.graph[idx].to_string());
        }

        // Classes unreachable from the roots (only possible inside cycles)
        // each get a trailing layer of their own.
        for idx in self.graph.node_indices() {
            if !depth.contains_key(&idx) {
                layers.push(vec![self.graph[idx].to_string()]);
            }
        }
        layers
    }
}

/// Summarize the class structure of `schema`.
#[must_use]
pub fn analyze(schema: &SchemaGraph) -> GraphSummary {
    let classes = ClassGraph::new(schema);
    let summary = GraphSummary {
        classes: schema.classes().len(),
        object_properties: schema.properties_of_kind(PropertyKind::Object).count(),
        datatype_properties: schema.properties_of_kind(PropertyKind::Datatype).count(),
        components: connected_components(&classes.graph).len(),
        has_cycles: toposort(&classes.graph, None).is_err(),
        layers: classes.layers(),
    };
    tracing::debug!(
        classes = summary.classes,
        components = summary.components,
        layers = summary.layers.len(),
        "schema graph analyzed"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{OntClass, OntProperty, build};
    use pretty_assertions::assert_eq;
    use sdf_core::Node;

    fn class(id: &str) -> OntClass {
        OntClass {
            id: id.to_string(),
            comment: String::new(),
        }
    }

    fn edge(from: &str, to: &str) -> OntProperty {
        OntProperty {
            id: format!("{from}_to_{to}"),
            domain: from.to_string(),
            range: Range::Class(to.to_string()),
            kind: PropertyKind::Object,
            comment: String::new(),
        }
    }

    #[test]
    fn tree_layers_by_depth() {
        let forest = vec![Node::element("model").with_children(vec![
            Node::element("static"),
            Node::element("link").with_children(vec![
                Node::element("visual").with_children(vec![Node::element("geometry")]),
                Node::element("collision").with_children(vec![Node::element("geometry")]),
            ]),
            Node::element("joint").with_children(vec![Node::attribute("type")]),
        ])];
        let summary = analyze(&build(&forest));

        assert_eq!(summary.classes, 5);
        assert_eq!(summary.object_properties, 4);
        assert_eq!(summary.datatype_properties, 4);
        assert_eq!(summary.components, 1);
        assert!(!summary.has_cycles);
        assert_eq!(
            summary.layers,
            vec![
                vec!["Model".to_string()],
                vec!["Model_Link".to_string(), "Model_Joint".to_string()],
                vec![
                    "Model_Link_Visual".to_string(),
                    "Model_Link_Collision".to_string()
                ],
            ]
        );
    }

    #[test]
    fn separate_roots_are_separate_components() {
        let forest = vec![Node::element("model"), Node::element("world")];
        let summary = analyze(&build(&forest));
        assert_eq!(summary.components, 2);
        assert_eq!(
            summary.layers,
            vec![vec!["Model".to_string(), "World".to_string()]]
        );
    }

    #[test]
    fn cycle_is_detected_and_still_layered() {
        let mut schema = SchemaGraph::new();
        schema.declare_class(class("A"));
        schema.declare_class(class("B"));
        schema.declare_property(edge("A", "B"));
        schema.declare_property(edge("B", "A"));

        let summary = analyze(&schema);
        assert!(summary.has_cycles);
        assert_eq!(
            summary.layers,
            vec![vec!["A".to_string()], vec!["B".to_string()]]
        );
    }

    #[test]
    fn empty_graph() {
        let summary = analyze(&SchemaGraph::new());
        assert_eq!(summary.classes, 0);
        assert_eq!(summary.components, 0);
        assert!(summary.layers.is_empty());
    }
}

//! Merge and graph building over realistic page trees.

use pretty_assertions::assert_eq;
use sdf_core::Node;
use sdf_ontology::{
    AuxiliaryForests, ExpansionPolicy, Merger, Primitive, PropertyKind, Range, SchemaGraph,
    analyze, merge, to_turtle,
};

fn model_page() -> Vec<Node> {
    vec![
        Node::element("model")
            .with_description("The model element defines a complete robot.")
            .with_children(vec![
                Node::attribute("name").with_details("Required: 1 Type: string Default: __default__ "),
                Node::element("static").with_details("Required: 0 Type: bool Default: false "),
                Node::element("link").with_details("Required: + Type: element "),
                Node::element("joint").with_details("Required: * Type: element "),
                Node::element("gripper").with_children(vec![
                    Node::attribute("name"),
                    Node::element("joint"),
                ]),
            ]),
    ]
}

fn auxiliary() -> AuxiliaryForests {
    let link = vec![
        Node::element("link")
            .with_description("A physical link.")
            .with_children(vec![
                Node::attribute("name").with_details("Type: string "),
                Node::element("gravity").with_details("Type: bool Default: true "),
                Node::element("inertial").with_children(vec![
                    Node::element("mass").with_details("Type: double Default: 1.0 "),
                ]),
            ]),
    ];
    let joint = vec![
        Node::element("joint")
            .with_description("A joint connects two links.")
            .with_children(vec![
                Node::attribute("type").with_details("Type: string "),
                Node::element("parent").with_details("Type: string "),
            ]),
    ];
    AuxiliaryForests::from([("link".to_string(), link), ("joint".to_string(), joint)])
}

#[test]
fn merge_then_build() {
    let merged = merge(model_page(), &auxiliary());
    let graph = SchemaGraph::build(&merged);

    let ids: Vec<_> = graph.classes().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["Model", "Model_Link", "Model_Link_Inertial", "Model_Joint", "Model_Gripper"]
    );

    let mass = graph.property("Model_Link_Inertial_mass").unwrap();
    assert_eq!(mass.range, Range::Primitive(Primitive::Double));
    // The joint under gripper stayed a placeholder, so it is a plain property.
    let gripper_joint = graph.property("Model_Gripper_joint").unwrap();
    assert_eq!(gripper_joint.kind, PropertyKind::Datatype);
}

#[test]
fn merge_does_not_alias_auxiliary_trees() {
    let mut aux = auxiliary();
    let primary = vec![Node::element("model").with_children(vec![
        Node::element("link"),
        Node::element("link"),
    ])];
    let mut merged = merge(primary, &aux);

    merged[0].children[0].children[0].name = "renamed".to_string();
    assert_eq!(merged[0].children[1].children[0].name, "name");

    aux.get_mut("link").unwrap()[0].children.clear();
    assert_eq!(merged[0].children[1].children.len(), 3);
}

#[test]
fn custom_policy_and_report() {
    let policy = ExpansionPolicy::unrestricted();
    let outcome = Merger::new(policy, 100).merge(model_page(), &auxiliary());
    // With no context rules the gripper's joint expands too.
    assert_eq!(outcome.report.expanded, 3);
    assert!(outcome.report.truncated.is_empty());
}

#[test]
fn turtle_and_summary_agree_with_graph() {
    let graph = SchemaGraph::build(&merge(model_page(), &auxiliary()));
    let ttl = to_turtle(&graph, "http://sdformat.org/spec/model");
    let declared = ttl.matches("rdf:type owl:Class").count();

    let summary = analyze(&graph);
    assert_eq!(declared, summary.classes);
    assert_eq!(summary.layers[0], vec!["Model".to_string()]);
    assert!(!summary.has_cycles);
}

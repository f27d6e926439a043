//! End-to-end extraction of a saved specification page.

use pretty_assertions::assert_eq;
use sdf_core::NodeKind;
use sdf_parser::{extract_html, extract_page, tokenize};

const MODEL_PAGE: &str = include_str!("fixtures/model.html");

#[test]
fn model_page_yields_single_model_root() {
    let forest = extract_html(MODEL_PAGE);
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].name, "model");
    assert_eq!(forest[0].node_type, NodeKind::Element);
}

#[test]
fn children_keep_document_order() {
    let forest = extract_html(MODEL_PAGE);
    let names: Vec<_> = forest[0].children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["name", "static", "link", "frame"]);
}

#[test]
fn attribute_and_details_are_captured() {
    let forest = extract_html(MODEL_PAGE);
    let name = &forest[0].children[0];
    assert_eq!(name.node_type, NodeKind::Attribute);
    assert!(name.details_raw.contains("Type:"), "{:?}", name.details_raw);
    assert!(name.details_raw.contains("string"), "{:?}", name.details_raw);
    assert_eq!(name.description, "A unique name for the model.");
}

#[test]
fn link_is_a_placeholder_leaf() {
    let forest = extract_html(MODEL_PAGE);
    let link = forest[0].find_child("link").expect("link child");
    assert!(link.is_leaf());
}

#[test]
fn nested_frame_children_are_extracted() {
    let forest = extract_html(MODEL_PAGE);
    let frame = forest[0].find_child("frame").expect("frame child");
    let names: Vec<_> = frame.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["attached_to", "pose"]);
    assert_eq!(frame.children[0].node_type, NodeKind::Attribute);
}

#[test]
fn second_window_and_script_text_are_ignored() {
    let forest = extract_html(MODEL_PAGE);
    assert!(forest.iter().all(|root| root.name != "unrelated"));
    assert_eq!(forest[0].count(), 7);
}

#[test]
fn extract_page_filters_roots_by_element() {
    assert_eq!(extract_page(MODEL_PAGE, "model").len(), 1);
    // No root named `world`: everything is kept.
    assert_eq!(extract_page(MODEL_PAGE, "world")[0].name, "model");
}

#[test]
fn tokenizer_decodes_entities_in_labels() {
    let events = tokenize(MODEL_PAGE);
    assert!(events.contains(&sdf_core::TagEvent::text("<model> ")));
}

#[test]
fn navigation_links_name_element_pages() {
    let events = tokenize(MODEL_PAGE);
    assert_eq!(
        sdf_parser::discover_element_names(&events),
        vec!["model".to_string(), "world".to_string()]
    );
}

use pretty_assertions::assert_eq;

use super::*;
use sdf_core::{Node, NodeKind};

mod capture_window;
mod fields;

fn window_open() -> TagEvent {
    TagEvent::start_with_class("div", "tree well")
}

fn div_end() -> TagEvent {
    TagEvent::end("div")
}

/// Events for `<li>` with label, details and description, left open so the
/// caller can nest a list before closing it.
fn item_open(label: &str, details: &str, description: &str) -> Vec<TagEvent> {
    let text = |content: &str| (!content.is_empty()).then(|| TagEvent::text(content));
    let mut events = vec![TagEvent::start("li"), TagEvent::start("h5")];
    events.extend(text(label));
    events.push(TagEvent::end("h5"));
    events.push(TagEvent::start_with_class("div", "col-xs-4"));
    events.extend(text(details));
    events.push(div_end());
    events.push(TagEvent::start_with_class("div", "col-xs-8"));
    events.extend(text(description));
    events.push(div_end());
    events
}

/// A complete leaf `<li>...</li>`.
fn leaf(label: &str) -> Vec<TagEvent> {
    let mut events = item_open(label, "", "");
    events.push(TagEvent::end("li"));
    events
}

/// Wrap item events in `<div class="tree well"><ul> ... </ul></div>`.
fn window(body: Vec<TagEvent>) -> Vec<TagEvent> {
    let mut events = vec![window_open(), TagEvent::start("ul")];
    events.extend(body);
    events.push(TagEvent::end("ul"));
    events.push(div_end());
    events
}

fn names(forest: &[Node]) -> Vec<&str> {
    forest.iter().map(|n| n.name.as_str()).collect()
}

#[test]
fn empty_stream_yields_empty_forest() {
    assert!(extract(&Vec::new()).is_empty());
}

#[test]
fn page_without_window_yields_empty_forest() {
    let mut events = vec![TagEvent::start_with_class("div", "container"), TagEvent::start("ul")];
    events.extend(leaf("model"));
    events.push(TagEvent::end("ul"));
    events.push(div_end());
    assert!(extract(&events).is_empty());
}

#[test]
fn single_leaf_inside_window() {
    let forest = extract(&window(leaf("<model>")));
    assert_eq!(forest, vec![Node::element("model")]);
}

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn only_first_window_is_honored() {
    let mut events = window(leaf("model"));
    events.extend(window(leaf("world")));
    let forest = extract(&events);
    assert_eq!(names(&forest), vec!["model"]);
}

#[test]
fn second_window_nested_in_other_containers_is_ignored() {
    let mut events = vec![TagEvent::start_with_class("div", "page")];
    events.extend(window(leaf("first")));
    events.push(TagEvent::start_with_class("div", "row"));
    events.extend(window(leaf("second")));
    events.push(div_end());
    events.push(div_end());
    assert_eq!(names(&extract(&events)), vec!["first"]);
}

#[test]
fn content_before_window_is_ignored() {
    let mut events = vec![TagEvent::start("ul")];
    events.extend(leaf("navigation"));
    events.push(TagEvent::end("ul"));
    events.extend(window(leaf("model")));
    assert_eq!(names(&extract(&events)), vec!["model"]);
}

#[test]
fn inner_containers_do_not_close_window() {
    let mut body = vec![TagEvent::start_with_class("div", "panel")];
    body.extend(leaf("model"));
    body.push(div_end());
    body.extend(leaf("world"));
    let forest = extract(&window(body));
    assert_eq!(names(&forest), vec!["model", "world"]);
}

#[test]
fn window_needs_both_classes() {
    let mut events = vec![TagEvent::start_with_class("div", "tree"), TagEvent::start("ul")];
    events.extend(leaf("model"));
    events.push(TagEvent::end("ul"));
    events.push(div_end());
    assert!(extract(&events).is_empty());
}

#[test]
fn unmatched_container_closes_are_clamped() {
    let mut events = vec![div_end(), div_end(), div_end()];
    events.extend(window(leaf("model")));
    events.push(div_end());
    assert_eq!(names(&extract(&events)), vec!["model"]);
}

#[test]
fn unclosed_window_keeps_partial_tree() {
    let mut events = vec![window_open(), TagEvent::start("ul")];
    events.extend(item_open("model", "", ""));
    events.push(TagEvent::start("ul"));
    events.extend(leaf("static"));
    let forest = extract(&events);
    assert_eq!(forest.len(), 1);
    assert_eq!(names(&forest[0].children), vec!["static"]);
}

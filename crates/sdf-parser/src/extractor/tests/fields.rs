use super::*;
use pretty_assertions::assert_eq;

#[test]
fn details_are_stored_verbatim() {
    let body = item_open("@name", "Required: 1 Type: string", "Description: Unique name.");
    let forest = extract(&window(body));
    let node = &forest[0];
    assert_eq!(node.node_type, NodeKind::Attribute);
    assert_eq!(node.name, "name");
    assert_eq!(node.details_raw, "Required: 1 Type: string ");
    assert_eq!(node.description, "Unique name.");
}

#[test]
fn details_fragments_are_space_separated() {
    let body = vec![
        TagEvent::start("li"),
        TagEvent::start_with_class("div", "col-xs-4"),
        TagEvent::start("b"),
        TagEvent::text("Type:"),
        TagEvent::end("b"),
        TagEvent::text("double"),
        div_end(),
    ];
    let forest = extract(&window(body));
    assert_eq!(forest[0].details_raw, "Type: double ");
}

#[test]
fn type_hint_text_stays_out_of_name() {
    let body = vec![
        TagEvent::start("li"),
        TagEvent::start("h5"),
        TagEvent::text("<collision> "),
        TagEvent::start("small"),
        TagEvent::text("Element"),
        TagEvent::end("small"),
        TagEvent::end("h5"),
    ];
    let forest = extract(&window(body));
    assert_eq!(forest[0].name, "collision");
    assert_eq!(forest[0].node_type, NodeKind::Element);
}

#[test]
fn attribute_type_hint_marks_attribute() {
    let body = vec![
        TagEvent::start("li"),
        TagEvent::start("h5"),
        TagEvent::text("version"),
        TagEvent::start("small"),
        TagEvent::text("Attribute"),
        TagEvent::end("small"),
        TagEvent::end("h5"),
    ];
    let forest = extract(&window(body));
    assert_eq!(forest[0].node_type, NodeKind::Attribute);
    assert_eq!(forest[0].name, "version");
}

#[test]
fn empty_name_is_retained() {
    let body = item_open("", "", "Description: orphan");
    let forest = extract(&window(body));
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].name, "");
    assert_eq!(forest[0].description, "orphan");
}

#[test]
fn nested_container_inside_column_does_not_close_it() {
    let body = vec![
        TagEvent::start("li"),
        TagEvent::start_with_class("div", "col-xs-8"),
        TagEvent::text("Description: first "),
        TagEvent::start("div"),
        TagEvent::text("second"),
        div_end(),
        div_end(),
    ];
    let forest = extract(&window(body));
    assert_eq!(forest[0].description, "first second");
}

#[test]
fn text_outside_regions_is_dropped() {
    let body = vec![
        TagEvent::start("li"),
        TagEvent::text("stray"),
        TagEvent::start("h5"),
        TagEvent::text("pose"),
        TagEvent::end("h5"),
        TagEvent::text("more stray"),
    ];
    let forest = extract(&window(body));
    assert_eq!(forest, vec![Node::element("pose")]);
}

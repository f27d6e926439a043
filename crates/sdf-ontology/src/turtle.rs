//! Turtle serialization of a [`SchemaGraph`].

use std::fmt::Write as _;

use crate::graph::{PropertyKind, Range, SchemaGraph};

/// Default ontology IRI; the `:` prefix is this IRI followed by `#`.
pub const DEFAULT_BASE_IRI: &str = "http://sdformat.org/spec/model";

/// Render `graph` as Turtle.
///
/// Classes come first, then properties, each in declaration order. Every
/// stanza carries its `rdfs:comment`.
#[must_use]
pub fn to_turtle(graph: &SchemaGraph, base_iri: &str) -> String {
    let base = base_iri.trim_end_matches('#');
    let mut out = String::new();

    let _ = writeln!(out, "@prefix : <{base}#> .");
    out.push_str("@prefix owl: <http://www.w3.org/2002/07/owl#> .\n");
    out.push_str("@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n");
    out.push_str("@prefix xml: <http://www.w3.org/XML/1998/namespace> .\n");
    out.push_str("@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .\n");
    out.push_str("@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n");
    let _ = writeln!(out, "@base <{base}> .");

    for class in graph.classes() {
        out.push('\n');
        let _ = writeln!(out, ":{} rdf:type owl:Class ;", class.id);
        let _ = writeln!(out, "    rdfs:comment \"{}\" .", escape(&class.comment));
    }

    for property in graph.properties() {
        let owl_type = match property.kind {
            PropertyKind::Object => "owl:ObjectProperty",
            PropertyKind::Datatype => "owl:DatatypeProperty",
        };
        let range = match &property.range {
            Range::Class(id) => format!(":{id}"),
            Range::Primitive(primitive) => primitive.xsd().to_string(),
        };
        out.push('\n');
        let _ = writeln!(out, ":{} rdf:type {owl_type} ;", property.id);
        let _ = writeln!(out, "    rdfs:domain :{} ;", property.domain);
        let _ = writeln!(out, "    rdfs:range {range} ;");
        let _ = writeln!(out, "    rdfs:comment \"{}\" .", escape(&property.comment));
    }

    out
}

/// Escape a literal for a double-quoted Turtle string.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

//! # sdf-ontology
//!
//! Turns extracted schema trees into an OWL ontology:
//! - [`merge`] grafts per-element pages onto the placeholders of the primary
//!   tree, gated by an [`ExpansionPolicy`] and a depth guard
//! - [`SchemaGraph::build`] maps complex nodes to classes and leaves to
//!   datatype properties typed from their [`parse_details`] blob
//! - [`to_turtle`] and [`analyze`] consume the finished graph
//!
//! Every stage is infallible. Missing data becomes empty values; runaway
//! expansion is cut off and reported in the [`MergeReport`].

pub mod analysis;
pub mod details;
pub mod graph;
pub mod merge;
pub mod turtle;
pub mod types;

pub use analysis::{GraphSummary, analyze};
pub use details::{Details, parse_details};
pub use graph::{OntClass, OntProperty, PropertyKind, Range, SchemaGraph, build};
pub use merge::{
    AuxiliaryForests, ExpansionPolicy, MergeOutcome, MergeReport, Merger, ROOT_CONTEXT, merge,
};
pub use turtle::{DEFAULT_BASE_IRI, to_turtle};
pub use types::Primitive;

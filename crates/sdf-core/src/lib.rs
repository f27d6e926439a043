//! # sdf-core
//!
//! Core types and error types for sdfo.
//!
//! This crate provides the foundational types shared across all sdfo crates:
//! - The schema tree (`Node`, `NodeKind`, `Forest`) in its serialized form
//! - Markup tag events consumed by the extractor
//! - Cross-cutting error types

pub mod errors;
pub mod event;
pub mod node;

pub use errors::CoreError;
pub use event::TagEvent;
pub use node::{Forest, Node, NodeKind};

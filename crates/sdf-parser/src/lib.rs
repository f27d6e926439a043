//! # sdf-parser
//!
//! Streaming extraction of element/attribute trees from SDFormat-style
//! documentation pages.
//!
//! A page is first flattened into [`TagEvent`](sdf_core::TagEvent)s by
//! [`tokenize`], then folded through the extractor state machine:
//! - the first `div.tree.well` container opens the capture window; nothing
//!   outside it builds nodes, and a second window is never honored
//! - `ul`/`li` nesting becomes the tree shape
//! - `h5` (name, `@` marks attributes), `div.col-xs-4` (details) and
//!   `div.col-xs-8` (description) fill the node fields
//!
//! The markers are data ([`PageLayout`]) so other documentation sites with
//! the same nested-list shape can be read by swapping the layout.

pub mod extractor;
pub mod index;
pub mod layout;
pub mod tokenizer;

pub use extractor::state::{ColumnField, ExtractorState, LabelField, Window};
pub use extractor::{extract, extract_html, extract_page, extract_with};
pub use index::discover_element_names;
pub use layout::PageLayout;
pub use tokenizer::tokenize;

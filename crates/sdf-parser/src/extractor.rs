//! Tree extraction from tag events.
//!
//! Folds a page's events through [`ExtractorState`] and returns the forest
//! found inside the first capture window. Pages without a window yield an
//! empty forest; malformed nesting yields a partial one. Neither is an error.

pub mod state;

mod helpers;

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

use sdf_core::{Forest, TagEvent};

use crate::layout::PageLayout;
use crate::tokenizer::tokenize;
use state::ExtractorState;

static DEFAULT_LAYOUT: LazyLock<PageLayout> = LazyLock::new(PageLayout::default);

/// Extract the forest from an event sequence using the SDFormat layout.
pub fn extract<'e>(events: impl IntoIterator<Item = &'e TagEvent>) -> Forest {
    extract_with(&DEFAULT_LAYOUT, events)
}

/// Extract the forest from an event sequence using a custom layout.
pub fn extract_with<'e>(
    layout: &PageLayout,
    events: impl IntoIterator<Item = &'e TagEvent>,
) -> Forest {
    events
        .into_iter()
        .fold(ExtractorState::new(layout), ExtractorState::step)
        .finish()
}

/// Tokenize and extract an HTML page.
#[must_use]
pub fn extract_html(html: &str) -> Forest {
    extract(&tokenize(html))
}

/// Extract the page documenting `element`.
///
/// Keeps only the roots named `element` when there are any; otherwise the
/// whole forest is returned, since some pages wrap the element differently.
#[must_use]
pub fn extract_page(html: &str, element: &str) -> Forest {
    let forest = extract_html(html);
    if forest.iter().any(|root| root.name == element) {
        forest
            .into_iter()
            .filter(|root| root.name == element)
            .collect()
    } else {
        if !forest.is_empty() {
            tracing::debug!(
                element,
                roots = forest.len(),
                "no root matches the page element; keeping all roots"
            );
        }
        forest
    }
}

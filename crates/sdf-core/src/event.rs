//! Markup tag events.
//!
//! The extractor consumes a totally ordered stream of these; producing them
//! (tokenizing a page) is the job of `sdf-parser::tokenize` or any other
//! source that can emit the same three shapes.

use serde::{Deserialize, Serialize};

/// One start tag, end tag, or text fragment of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TagEvent {
    Start {
        name: String,
        #[serde(default)]
        attrs: Vec<(String, String)>,
    },
    End {
        name: String,
    },
    Text(String),
}

impl TagEvent {
    /// Start tag without attributes.
    #[must_use]
    pub fn start(name: impl Into<String>) -> Self {
        Self::Start {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    /// Start tag carrying a `class` attribute.
    #[must_use]
    pub fn start_with_class(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self::Start {
            name: name.into(),
            attrs: vec![("class".to_string(), class.into())],
        }
    }

    #[must_use]
    pub fn end(name: impl Into<String>) -> Self {
        Self::End { name: name.into() }
    }

    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Value of the first attribute named `name` on a start tag.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Self::Start { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Whitespace-separated entries of the `class` attribute.
    pub fn class_list(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }

    /// True when the start tag carries every class in `required`.
    #[must_use]
    pub fn has_classes(&self, required: &[String]) -> bool {
        required
            .iter()
            .all(|wanted| self.class_list().any(|c| c == wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_splits_on_whitespace() {
        let ev = TagEvent::start_with_class("div", "  tree   well ");
        assert_eq!(ev.class_list().collect::<Vec<_>>(), vec!["tree", "well"]);
        assert!(ev.has_classes(&["well".to_string(), "tree".to_string()]));
        assert!(!ev.has_classes(&["tree".to_string(), "panel".to_string()]));
    }

    #[test]
    fn end_and_text_have_no_attributes() {
        assert_eq!(TagEvent::end("div").attr("class"), None);
        assert_eq!(TagEvent::text("x").class_list().count(), 0);
    }

    #[test]
    fn empty_requirement_matches_any_start_tag() {
        assert!(TagEvent::start("ul").has_classes(&[]));
    }
}

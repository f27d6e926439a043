//! Element discovery on the specification index page.

use std::collections::BTreeSet;

use sdf_core::TagEvent;

const SKIPPED_SUFFIXES: [&str; 3] = [".html", ".css", ".js"];

/// Collect element names linked from an index page.
///
/// Element pages are linked by bare relative names (`href="link"`). Anything
/// that looks like a path, anchor, absolute URL or static asset is skipped.
/// Names come back sorted and de-duplicated.
pub fn discover_element_names<'e>(events: impl IntoIterator<Item = &'e TagEvent>) -> Vec<String> {
    let names: BTreeSet<String> = events
        .into_iter()
        .filter(|event| matches!(event, TagEvent::Start { name, .. } if name == "a"))
        .filter_map(|event| event.attr("href"))
        .map(str::trim)
        .filter(|href| is_element_href(href))
        .map(String::from)
        .collect();

    tracing::debug!(count = names.len(), "discovered element pages");
    names.into_iter().collect()
}

fn is_element_href(href: &str) -> bool {
    !href.is_empty()
        && !href.starts_with('.')
        && !href.starts_with("http")
        && !href.contains('#')
        && !href.contains('/')
        && !SKIPPED_SUFFIXES.iter().any(|suffix| href.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_bare_names_sorted_and_unique() {
        let html = r##"
            <a href="world">world</a>
            <a href="model">model</a>
            <a href="world">again</a>
            <a href="#top">top</a>
            <a href="../1.11/model">older</a>
            <a href="https://gazebosim.org">gazebo</a>
            <a href="style.css">css</a>
            <a href="index.html">home</a>
            <a href="./link">relative</a>
            <a>no href</a>
            <link href="favicon">
        "##;
        assert_eq!(
            discover_element_names(&tokenize(html)),
            vec!["model".to_string(), "world".to_string()]
        );
    }
}

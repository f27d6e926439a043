//! Markup markers that drive extraction.

use serde::{Deserialize, Serialize};

/// Tags and classes that identify each region of a documentation page.
///
/// Defaults describe the SDFormat specification pages:
///
/// ```text
/// <div class="tree well">
///   <ul>
///     <li>
///       <h5>&lt;link&gt; <small>Element</small></h5>
///       <div class="col-xs-4">Required: 1 ...</div>
///       <div class="col-xs-8">Description: ...</div>
///       <ul> ...children... </ul>
///     </li>
///   </ul>
/// </div>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Tag counted for window nesting; also carries the two columns.
    pub container_tag: String,
    /// Classes that together mark the capture window container.
    pub window_classes: Vec<String>,
    pub list_tag: String,
    pub item_tag: String,
    pub name_tag: String,
    /// Inline label nested inside the name label.
    pub type_hint_tag: String,
    pub details_classes: Vec<String>,
    pub description_classes: Vec<String>,
    /// Leading character of attribute names.
    pub attribute_sigil: char,
    /// Characters stripped from names (`<link>` -> `link`).
    pub decoration: Vec<char>,
    /// Label removed from the front of descriptions.
    pub description_label: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            container_tag: "div".to_string(),
            window_classes: vec!["tree".to_string(), "well".to_string()],
            list_tag: "ul".to_string(),
            item_tag: "li".to_string(),
            name_tag: "h5".to_string(),
            type_hint_tag: "small".to_string(),
            details_classes: vec!["col-xs-4".to_string()],
            description_classes: vec!["col-xs-8".to_string()],
            attribute_sigil: '@',
            decoration: vec!['<', '>'],
            description_label: "Description:".to_string(),
        }
    }
}

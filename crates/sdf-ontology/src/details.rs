//! Parsing of the raw details blob captured next to each node.
//!
//! Pages render details as `Required: 1 Type: double Default: 0.0`, spread
//! over several inline tags. The extractor keeps the text verbatim; the three
//! fields are pulled out here.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// Pattern is a literal; `None` only if it stops compiling, which then reads
// as "no labels".
static LABEL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(Required|Type|Default):").ok());

/// A label occurrence: label name and the byte span of `Name:`.
struct Mark<'r> {
    name: &'r str,
    start: usize,
    end: usize,
}

fn marks(raw: &str) -> Vec<Mark<'_>> {
    let Some(label) = LABEL.as_ref() else {
        return Vec::new();
    };
    label
        .captures_iter(raw)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            Some(Mark {
                name: captures.get(1)?.as_str(),
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect()
}

/// Trimmed text between the first `name` label and whatever label follows it.
fn field<'r>(raw: &'r str, marks: &[Mark<'_>], name: &str) -> Option<&'r str> {
    let idx = marks.iter().position(|mark| mark.name == name)?;
    let end = marks.get(idx + 1).map_or(raw.len(), |next| next.start);
    raw.get(marks[idx].end..end).map(str::trim)
}

/// Fields found in a details blob. Absent labels stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Details {
    /// Multiplicity marker as printed: `0`, `1`, `*`, `+`, `-1`.
    pub required: Option<String>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub default: Option<String>,
}

impl Details {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required.is_none() && self.type_name.is_none() && self.default.is_none()
    }
}

/// Locate the `Required:`, `Type:` and `Default:` labels in `raw`.
///
/// Labels may come in any order. Each field is taken from the first
/// occurrence of its label and runs up to the next label of any kind, or the
/// end of the text. `Required` keeps only the first token of its value, so
/// `Required: Type: pose` has no requirement.
#[must_use]
pub fn parse_details(raw: &str) -> Details {
    let marks = marks(raw);
    Details {
        required: field(raw, &marks, "Required")
            .and_then(|value| value.split_whitespace().next())
            .map(str::to_string),
        type_name: field(raw, &marks, "Type").map(str::to_string),
        default: field(raw, &marks, "Default").map(str::to_string),
    }
}

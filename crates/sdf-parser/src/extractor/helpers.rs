use sdf_core::NodeKind;

/// Turn a raw name label into `(name, kind)`.
///
/// Decoration characters are removed first (`<link>` -> `link`). A leading
/// sigil marks an attribute and is dropped from the name. Without a sigil a
/// type hint reading `Attribute` also marks one; older page revisions only
/// carry the hint.
pub(super) fn split_label(
    raw: &str,
    type_hint: &str,
    sigil: char,
    decoration: &[char],
) -> (String, NodeKind) {
    let cleaned: String = raw.chars().filter(|c| !decoration.contains(c)).collect();
    let cleaned = cleaned.trim();

    if let Some(rest) = cleaned.strip_prefix(sigil) {
        return (rest.trim().to_string(), NodeKind::Attribute);
    }

    let kind = if type_hint.trim().eq_ignore_ascii_case("attribute") {
        NodeKind::Attribute
    } else {
        NodeKind::Element
    };
    (cleaned.to_string(), kind)
}

/// Trim a description and drop its leading label, if present.
pub(super) fn clean_description(raw: &str, label: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix(label)
        .map_or(trimmed, str::trim)
        .to_string()
}

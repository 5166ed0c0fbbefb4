//! Class-name merging shared by every primitive.

/// Joins optional class fragments into one `class` attribute value.
///
/// Fragments are split on whitespace; empty fragments and repeated class names are dropped, and
/// the first occurrence of each class keeps its position.
pub fn merge_classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut merged: Vec<&'a str> = Vec::new();
    for class in parts.into_iter().flatten().flat_map(str::split_whitespace) {
        if !merged.contains(&class) {
            merged.push(class);
        }
    }
    merged.join(" ")
}

/// Appends a caller-supplied layout class to a primitive's base class.
pub fn merge_layout_class(base: &str, layout_class: Option<&str>) -> String {
    merge_classes([Some(base), layout_class])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn skips_missing_and_blank_fragments() {
        assert_eq!(
            merge_classes([Some("ui-button"), None, Some("  "), Some("wide")]),
            "ui-button wide"
        );
    }

    #[test]
    fn drops_duplicates_keeping_first_position() {
        assert_eq!(
            merge_classes([Some("a b"), Some("c a"), Some("b d")]),
            "a b c d"
        );
    }

    #[test]
    fn layout_class_is_optional() {
        assert_eq!(merge_layout_class("ui-stack", None), "ui-stack");
        assert_eq!(merge_layout_class("ui-stack", Some("")), "ui-stack");
        assert_eq!(
            merge_layout_class("ui-stack", Some("sidebar-body")),
            "ui-stack sidebar-body"
        );
    }
}

//! Small helpers shared between the component crate and its hosts.

/// Joins optional class names into a single space-separated class list.
///
/// Absent and blank entries are skipped, so callers can pass optional
/// caller-supplied classes straight through without checking them first.
///
/// ```
/// use shared_utils::class_names;
///
/// assert_eq!(class_names([Some("mt-2"), None, Some("spinner")]), "mt-2 spinner");
/// ```
pub fn class_names<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    names
        .into_iter()
        .flatten()
        .filter(|name| !name.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_present_entries_in_order() {
        assert_eq!(
            class_names([Some("a"), Some("b"), Some("c")]),
            "a b c"
        );
    }

    #[test]
    fn skips_absent_and_blank_entries() {
        assert_eq!(
            class_names([None, Some(""), Some("spinner"), Some("   "), None]),
            "spinner"
        );
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(class_names(std::iter::empty()), "");
        assert_eq!(class_names([None, None]), "");
    }

    #[test]
    fn keeps_multi_class_entries_verbatim() {
        assert_eq!(
            class_names([Some("mt-2 mx-auto"), Some("spinnerInvert")]),
            "mt-2 mx-auto spinnerInvert"
        );
    }
}

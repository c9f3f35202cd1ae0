//! Interactive-element predicate shared by the DOM adapter and the in-memory test host.

/// Query-selector equivalent of [`is_focusable`].
///
/// Hosts backed by a real document should run this selector against the trap
/// root and then filter the results through [`is_focusable`], which also
/// rejects disabled controls, hidden inputs, and negative tab indices that a
/// selector alone cannot express.
pub const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Borrowed view of the element attributes consulted by [`is_focusable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusCandidate<'a> {
    /// Lower- or upper-case tag name (`"button"`, `"A"`, ...).
    pub tag_name: &'a str,
    /// Whether an `href` attribute is present.
    pub has_href: bool,
    /// Whether a `disabled` attribute is present.
    pub disabled: bool,
    /// Raw `tabindex` attribute text, if present.
    pub tab_index: Option<&'a str>,
    /// Raw `type` attribute text for `<input>` elements.
    pub input_type: Option<&'a str>,
    /// Whether the `hidden` attribute is present.
    pub hidden: bool,
}

impl<'a> FocusCandidate<'a> {
    /// Creates a candidate with only a tag name set.
    pub fn new(tag_name: &'a str) -> Self {
        Self {
            tag_name,
            ..Self::default()
        }
    }
}

fn parse_tab_index(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}

fn is_native_control(tag_name: &str) -> bool {
    ["button", "input", "select", "textarea"]
        .iter()
        .any(|tag| tag_name.eq_ignore_ascii_case(tag))
}

fn is_link(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("a") || tag_name.eq_ignore_ascii_case("area")
}

/// Returns whether an element with the given attributes can take keyboard focus
/// through sequential (Tab) navigation.
///
/// Native controls qualify unless disabled, anchors qualify when they carry an
/// `href`, and any element qualifies with an explicit non-negative tab index.
/// An explicit negative tab index always removes the element from the tab
/// order, even for native controls.
pub fn is_focusable(candidate: &FocusCandidate<'_>) -> bool {
    if candidate.hidden {
        return false;
    }

    let tab_index = candidate.tab_index.and_then(parse_tab_index);
    if matches!(tab_index, Some(index) if index < 0) {
        return false;
    }

    if is_native_control(candidate.tag_name) {
        if candidate.disabled {
            return false;
        }
        let hidden_input = candidate.tag_name.eq_ignore_ascii_case("input")
            && candidate
                .input_type
                .is_some_and(|kind| kind.eq_ignore_ascii_case("hidden"));
        return !hidden_input;
    }

    if is_link(candidate.tag_name) && candidate.has_href {
        return true;
    }

    tab_index.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_controls_are_focusable_unless_disabled() {
        for tag in ["button", "INPUT", "select", "textarea"] {
            assert!(is_focusable(&FocusCandidate::new(tag)), "{tag}");
            assert!(
                !is_focusable(&FocusCandidate {
                    disabled: true,
                    ..FocusCandidate::new(tag)
                }),
                "disabled {tag}"
            );
        }
    }

    #[test]
    fn anchors_need_an_href() {
        assert!(!is_focusable(&FocusCandidate::new("a")));
        assert!(is_focusable(&FocusCandidate {
            has_href: true,
            ..FocusCandidate::new("a")
        }));
    }

    #[test]
    fn explicit_tab_index_controls_membership() {
        assert!(!is_focusable(&FocusCandidate::new("div")));
        assert!(is_focusable(&FocusCandidate {
            tab_index: Some("0"),
            ..FocusCandidate::new("div")
        }));
        assert!(is_focusable(&FocusCandidate {
            tab_index: Some(" 2 "),
            ..FocusCandidate::new("span")
        }));
        assert!(!is_focusable(&FocusCandidate {
            tab_index: Some("-1"),
            ..FocusCandidate::new("div")
        }));
        assert!(!is_focusable(&FocusCandidate {
            tab_index: Some("-1"),
            ..FocusCandidate::new("button")
        }));
    }

    #[test]
    fn malformed_tab_index_is_ignored() {
        assert!(!is_focusable(&FocusCandidate {
            tab_index: Some("first"),
            ..FocusCandidate::new("div")
        }));
        assert!(is_focusable(&FocusCandidate {
            tab_index: Some("first"),
            ..FocusCandidate::new("button")
        }));
    }

    #[test]
    fn hidden_elements_and_hidden_inputs_are_skipped() {
        assert!(!is_focusable(&FocusCandidate {
            input_type: Some("hidden"),
            ..FocusCandidate::new("input")
        }));
        assert!(is_focusable(&FocusCandidate {
            input_type: Some("email"),
            ..FocusCandidate::new("input")
        }));
        assert!(!is_focusable(&FocusCandidate {
            hidden: true,
            ..FocusCandidate::new("button")
        }));
    }
}

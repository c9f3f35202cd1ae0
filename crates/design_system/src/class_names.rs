//! Class-name composition for component roots.
//!
//! Components merge their base `ui-*` class with caller-supplied utility
//! classes. Utility classes that set the same property resolve last-wins, so a
//! caller can override a default `px-4` with `px-2` without producing both.

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const DISPLAYS: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "contents",
    "hidden",
];
const POSITIONS: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const FLEX_DIRECTIONS: &[&str] = &["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"];
const VISIBILITY: &[&str] = &["visible", "invisible", "collapse"];

/// Prefixes whose value is a single property. Longer prefixes come first so
/// `gap-x-2` is not read as `gap`.
const PREFIX_GROUPS: &[&str] = &[
    "rounded-tl",
    "rounded-tr",
    "rounded-bl",
    "rounded-br",
    "rounded-t",
    "rounded-r",
    "rounded-b",
    "rounded-l",
    "rounded",
    "overflow-x",
    "overflow-y",
    "overflow",
    "grid-cols",
    "col-span",
    "min-w",
    "min-h",
    "max-w",
    "max-h",
    "gap-x",
    "gap-y",
    "gap",
    "space-x",
    "space-y",
    "inset",
    "top",
    "right",
    "bottom",
    "left",
    "items",
    "justify",
    "leading",
    "tracking",
    "opacity",
    "shadow",
    "cursor",
    "duration",
    "delay",
    "ease",
    "order",
    "bg",
    "px",
    "py",
    "pt",
    "pr",
    "pb",
    "pl",
    "ps",
    "pe",
    "p",
    "mx",
    "my",
    "mt",
    "mr",
    "mb",
    "ml",
    "m",
    "w",
    "h",
    "z",
];

/// Splits `class` into its variant prefix (`hover:`, `md:`, ...) and utility.
///
/// Colons inside `[...]` arbitrary values are not variant separators.
fn split_variants(class: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split_at = None;
    for (index, ch) in class.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split_at = Some(index),
            _ => {}
        }
    }
    match split_at {
        Some(index) => (&class[..=index], &class[index + 1..]),
        None => ("", class),
    }
}

fn conflict_group(utility: &str) -> Option<String> {
    let utility = utility.strip_prefix('!').unwrap_or(utility);
    let utility = utility.strip_prefix('-').unwrap_or(utility);

    if let Some(arbitrary) = utility.strip_prefix('[') {
        return arbitrary
            .split_once(':')
            .map(|(property, _)| format!("[{property}]"));
    }
    if DISPLAYS.contains(&utility) {
        return Some("display".to_string());
    }
    if POSITIONS.contains(&utility) {
        return Some("position".to_string());
    }
    if FLEX_DIRECTIONS.contains(&utility) {
        return Some("flex-direction".to_string());
    }
    if VISIBILITY.contains(&utility) {
        return Some("visibility".to_string());
    }
    if utility == "border" {
        return Some("border-width".to_string());
    }

    if let Some(value) = utility.strip_prefix("text-") {
        let group = if TEXT_SIZES.contains(&value) {
            "text-size"
        } else if TEXT_ALIGNS.contains(&value) {
            "text-align"
        } else {
            "text-color"
        };
        return Some(group.to_string());
    }
    if let Some(value) = utility.strip_prefix("font-") {
        let group = if FONT_WEIGHTS.contains(&value) {
            "font-weight"
        } else {
            "font-family"
        };
        return Some(group.to_string());
    }
    if let Some(value) = utility.strip_prefix("border-") {
        if value.chars().all(|ch| ch.is_ascii_digit()) {
            return Some("border-width".to_string());
        }
        if BORDER_STYLES.contains(&value) {
            return Some("border-style".to_string());
        }
        let side = value.split('-').next().unwrap_or_default();
        if ["t", "r", "b", "l", "x", "y", "s", "e"].contains(&side) {
            return None;
        }
        return Some("border-color".to_string());
    }

    PREFIX_GROUPS
        .iter()
        .find(|prefix| {
            utility
                .strip_prefix(**prefix)
                .is_some_and(|rest| rest.starts_with('-'))
        })
        .map(|prefix| (*prefix).to_string())
}

fn conflict_key(class: &str) -> String {
    let (variants, utility) = split_variants(class);
    let important = if utility.starts_with('!') { "!" } else { "" };
    match conflict_group(utility) {
        Some(group) => format!("{variants}{important}{group}"),
        None => format!("={class}"),
    }
}

/// Ordered, conflict-aware class accumulator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    entries: Vec<(String, String)>,
}

impl ClassList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every whitespace-separated class in `classes`.
    pub fn add(mut self, classes: &str) -> Self {
        self.push(classes);
        self
    }

    /// Adds `classes` only when `condition` holds.
    pub fn add_if(self, condition: bool, classes: &str) -> Self {
        if condition {
            self.add(classes)
        } else {
            self
        }
    }

    /// Adds `classes` when present.
    pub fn add_opt(self, classes: Option<&str>) -> Self {
        match classes {
            Some(classes) => self.add(classes),
            None => self,
        }
    }

    /// In-place variant of [`ClassList::add`].
    pub fn push(&mut self, classes: &str) {
        for class in classes.split_whitespace() {
            let key = conflict_key(class);
            self.entries.retain(|(existing, _)| *existing != key);
            self.entries.push((key, class.to_string()));
        }
    }

    /// Whether nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the `class` attribute value.
    pub fn build(&self) -> String {
        self.entries
            .iter()
            .map(|(_, class)| class.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Merges class fragments left to right. Empty fragments are ignored.
pub fn cn(parts: &[&str]) -> String {
    parts
        .iter()
        .fold(ClassList::new(), |list, part| list.add(part))
        .build()
}

/// Merges a component base class with the caller's optional class hook.
pub(crate) fn merge_class(base: &str, extra: Option<&str>) -> String {
    ClassList::new().add(base).add_opt(extra).build()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn joins_fragments_and_drops_empties() {
        assert_eq!(cn(&["foo", "bar"]), "foo bar");
        assert_eq!(cn(&["", "  ", ""]), "");
        assert_eq!(cn(&["foo bar", "baz"]), "foo bar baz");
    }

    #[test]
    fn conditional_classes() {
        let active = true;
        let disabled = false;
        let classes = ClassList::new()
            .add("base")
            .add_if(active, "active")
            .add_if(disabled, "disabled")
            .build();
        assert_eq!(classes, "base active");
    }

    #[test]
    fn later_utility_wins_within_a_group() {
        assert_eq!(cn(&["px-2", "px-4"]), "px-4");
        assert_eq!(cn(&["text-red-500", "text-blue-500"]), "text-blue-500");
        assert_eq!(cn(&["p-6 rounded-xl", "rounded-lg"]), "p-6 rounded-lg");
        assert_eq!(cn(&["flex", "hidden"]), "hidden");
    }

    #[test]
    fn different_properties_sharing_a_prefix_coexist() {
        assert_eq!(cn(&["text-sm", "text-blue-500"]), "text-sm text-blue-500");
        assert_eq!(cn(&["font-mono", "font-bold"]), "font-mono font-bold");
        assert_eq!(cn(&["border", "border-zinc-400"]), "border border-zinc-400");
        assert_eq!(cn(&["px-2", "py-4"]), "px-2 py-4");
        assert_eq!(cn(&["max-w-3xl", "m-2"]), "max-w-3xl m-2");
    }

    #[test]
    fn variants_scope_conflicts() {
        assert_eq!(cn(&["hover:px-2", "px-4"]), "hover:px-2 px-4");
        assert_eq!(cn(&["hover:px-2", "hover:px-4"]), "hover:px-4");
        assert_eq!(
            cn(&["sm:h-0 sm:invisible", "sm:visible"]),
            "sm:h-0 sm:visible"
        );
    }

    #[test]
    fn arbitrary_values_keep_their_colons() {
        assert_eq!(
            cn(&["[transform-style:preserve-3d]", "[transform:rotateY(180deg)]"]),
            "[transform-style:preserve-3d] [transform:rotateY(180deg)]"
        );
        assert_eq!(
            cn(&["hover:[transform:none]", "hover:[transform:scale(1.1)]"]),
            "hover:[transform:scale(1.1)]"
        );
    }

    #[test]
    fn duplicate_plain_classes_collapse_to_the_last_position() {
        assert_eq!(cn(&["a b", "a"]), "b a");
        assert_eq!(merge_class("ui-card", Some("ui-card custom")), "ui-card custom");
        assert_eq!(merge_class("ui-card", None), "ui-card");
    }

    #[test]
    fn important_and_negative_utilities() {
        assert_eq!(cn(&["!relative", "!absolute"]), "!absolute");
        assert_eq!(cn(&["relative", "!absolute"]), "relative !absolute");
        assert_eq!(cn(&["-mt-2", "mt-4"]), "mt-4");
    }
}

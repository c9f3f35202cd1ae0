use serde::{Deserialize, Serialize};

/// Direction of a sequential-navigation key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabDirection {
    /// `Tab`.
    Forward,
    /// `Shift+Tab`.
    Backward,
}

/// Modifier state of a keyboard event, decoupled from any DOM event type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    /// Shift held.
    pub shift: bool,
    /// Control held.
    pub ctrl: bool,
    /// Alt/Option held.
    pub alt: bool,
    /// Meta/Command held.
    pub meta: bool,
}

impl TabDirection {
    /// Maps a `KeyboardEvent.key` value and its modifiers to a tab direction.
    ///
    /// Returns `None` for every key other than `Tab`, and for `Tab` chords that
    /// involve Ctrl, Alt, or Meta (browser tab switching and similar shortcuts).
    pub fn from_key(key: &str, modifiers: KeyModifiers) -> Option<Self> {
        if key != "Tab" || modifiers.ctrl || modifiers.alt || modifiers.meta {
            return None;
        }
        Some(if modifiers.shift {
            Self::Backward
        } else {
            Self::Forward
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_tab_and_shift_tab() {
        assert_eq!(
            TabDirection::from_key("Tab", KeyModifiers::default()),
            Some(TabDirection::Forward)
        );
        assert_eq!(
            TabDirection::from_key(
                "Tab",
                KeyModifiers {
                    shift: true,
                    ..KeyModifiers::default()
                }
            ),
            Some(TabDirection::Backward)
        );
    }

    #[test]
    fn ignores_other_keys_and_shortcut_chords() {
        assert_eq!(TabDirection::from_key("Enter", KeyModifiers::default()), None);
        assert_eq!(TabDirection::from_key("tab", KeyModifiers::default()), None);
        assert_eq!(
            TabDirection::from_key(
                "Tab",
                KeyModifiers {
                    ctrl: true,
                    ..KeyModifiers::default()
                }
            ),
            None
        );
        assert_eq!(
            TabDirection::from_key(
                "Tab",
                KeyModifiers {
                    alt: true,
                    shift: true,
                    ..KeyModifiers::default()
                }
            ),
            None
        );
    }
}

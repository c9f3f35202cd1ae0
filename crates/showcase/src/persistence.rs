//! `localStorage` persistence for the showcase's selected story and demo state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
const STATE_KEY: &str = "design_system.showcase.v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Gallery page.
pub enum Story {
    /// Buttons, links, and badges.
    #[default]
    Actions,
    /// Field family, checkboxes, and radios.
    Forms,
    /// Cards, containers, sections, and typography.
    Surfaces,
    /// Alerts.
    Feedback,
    /// Stepper and side navigation.
    Navigation,
    /// Terminal surface and typewriter.
    Terminal,
    /// Focus trap canvas.
    FocusTrap,
    /// Card modal scenario.
    CardModal,
}

impl Story {
    /// Every story in gallery order.
    pub const ALL: [Story; 8] = [
        Story::Actions,
        Story::Forms,
        Story::Surfaces,
        Story::Feedback,
        Story::Navigation,
        Story::Terminal,
        Story::FocusTrap,
        Story::CardModal,
    ];

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Actions => "Actions",
            Self::Forms => "Forms",
            Self::Surfaces => "Surfaces",
            Self::Feedback => "Feedback",
            Self::Navigation => "Navigation",
            Self::Terminal => "Terminal",
            Self::FocusTrap => "Focus trap",
            Self::CardModal => "Card modal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Persisted showcase state.
pub struct ShowcaseState {
    /// Selected story.
    pub story: Story,
    /// Whether the focus-trap canvas is trapping.
    pub trap_active: bool,
    /// Current stepper step.
    pub step: usize,
    /// Newsletter checkbox demo value.
    pub newsletter: bool,
    /// Selected contact channel in the radio demo.
    pub contact_channel: String,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            story: Story::Actions,
            trap_active: false,
            step: 0,
            newsletter: true,
            contact_channel: "email".to_string(),
        }
    }
}

#[derive(Debug, Error)]
/// Persistence failures. Always logged, never shown.
pub enum StorageError {
    /// `window.localStorage` is missing or blocked.
    #[error("localStorage unavailable")]
    Unavailable,
    /// A storage call threw.
    #[error("localStorage {operation} failed: {message}")]
    Js {
        /// Storage method name.
        operation: &'static str,
        /// Stringified JS exception.
        message: String,
    },
    /// The stored payload does not match [`ShowcaseState`].
    #[error("showcase state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses a stored payload. Missing fields take their defaults.
pub fn decode_state(raw: &str) -> Result<ShowcaseState, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

/// Serializes state for storage.
pub fn encode_state(state: &ShowcaseState) -> Result<String, StorageError> {
    Ok(serde_json::to_string(state)?)
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// Loads persisted state; `Ok(None)` when nothing was saved.
///
/// On non-WASM targets this always returns `Ok(None)`.
pub fn load_state() -> Result<Option<ShowcaseState>, StorageError> {
    #[cfg(target_arch = "wasm32")]
    {
        let raw = local_storage()?
            .get_item(STATE_KEY)
            .map_err(|err| StorageError::Js {
                operation: "getItem",
                message: format!("{err:?}"),
            })?;
        raw.as_deref().map(decode_state).transpose()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(None)
    }
}

/// Saves state.
///
/// # Errors
///
/// Returns an error when localStorage is unavailable or the write fails.
pub fn save_state(state: &ShowcaseState) -> Result<(), StorageError> {
    #[cfg(target_arch = "wasm32")]
    {
        let raw = encode_state(state)?;
        local_storage()?
            .set_item(STATE_KEY, &raw)
            .map_err(|err| StorageError::Js {
                operation: "setItem",
                message: format!("{err:?}"),
            })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        encode_state(state).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stored_state_survives_a_save_load_cycle() {
        let state = ShowcaseState {
            story: Story::CardModal,
            trap_active: true,
            step: 2,
            newsletter: false,
            contact_channel: "phone".to_string(),
        };
        let raw = encode_state(&state).expect("encode");
        assert!(raw.contains("\"card-modal\""));
        assert_eq!(decode_state(&raw).expect("decode"), state);
    }

    #[test]
    fn older_payloads_fill_missing_fields_with_defaults() {
        let state = decode_state(r#"{"story":"focus-trap"}"#).expect("decode");
        assert_eq!(
            state,
            ShowcaseState {
                story: Story::FocusTrap,
                ..ShowcaseState::default()
            }
        );
    }

    #[test]
    fn corrupt_payloads_are_reported() {
        assert!(matches!(decode_state("{story"), Err(StorageError::Json(_))));
        assert!(matches!(
            decode_state(r#"{"story":"carousel"}"#),
            Err(StorageError::Json(_))
        ));
    }

    #[test]
    fn native_targets_have_no_storage() {
        assert!(matches!(load_state(), Ok(None)));
        assert!(save_state(&ShowcaseState::default()).is_ok());
    }

    #[test]
    fn every_story_is_listed_once() {
        let labels: HashSet<_> = Story::ALL.iter().map(|story| story.label()).collect();
        let stories: HashSet<_> = Story::ALL.iter().copied().collect();
        assert_eq!(labels.len(), Story::ALL.len());
        assert_eq!(stories.len(), Story::ALL.len());
        assert_eq!(Story::ALL[0], Story::default());
    }
}

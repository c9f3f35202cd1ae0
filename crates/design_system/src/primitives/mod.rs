//! Shared control, form, layout, typography, navigation, and terminal primitives.
//!
//! Every primitive root carries the `data-ui-primitive` / `data-ui-kind`
//! contract plus the variant and size tokens defined here, so styling layers
//! can target state without depending on generated class names.

use std::sync::atomic::{AtomicU64, Ordering};

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::class_names::merge_class;
use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod field;
mod layout;
mod navigation;
mod terminal;

pub use controls::{Button, Checkbox, ExternalLinkButton, LinkButton, Radio};
pub use data_display::{
    Alert, Badge, Card, CardContent, CardFooter, CardHeader, CardVariant, Heading,
    InteractiveCard, Label, Paragraph, Text,
};
pub use field::{
    FieldError, FieldHint, FieldIds, FieldLabel, FieldMessage, FieldRoot, TextArea, TextInput,
};
pub use layout::{Container, Section};
pub use navigation::{NavItem, SideNav, StepItem, Stepper};
pub use terminal::{
    TerminalBody, TerminalContainer, TerminalControls, TerminalHeader, TerminalWindowState,
    TypeWriter, TypewriterConfig, TypewriterState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Action button variants.
pub enum ButtonVariant {
    /// Filled primary action.
    #[default]
    Primary,
    /// Lower-emphasis filled action.
    Secondary,
    /// Transparent action.
    Ghost,
    /// Bordered action.
    Outlined,
    /// Destructive action.
    Destructive,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Outlined => "outlined",
            Self::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Action button sizes.
pub enum ButtonSize {
    /// Dense.
    Sm,
    /// Default.
    #[default]
    Md,
    /// Large.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Anchor-styled button variants.
pub enum LinkVariant {
    /// Filled primary link.
    #[default]
    Primary,
    /// Lower-emphasis link.
    Secondary,
    /// Transparent link.
    Ghost,
    /// Call-to-action link.
    Cta,
    /// LinkedIn brand link.
    Linkedin,
}

impl LinkVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Cta => "cta",
            Self::Linkedin => "linkedin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Anchor-styled button sizes.
pub enum LinkSize {
    /// Dense.
    Sm,
    /// Default.
    #[default]
    Md,
    /// Large.
    Lg,
    /// Hero.
    Xl,
}

impl LinkSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Badge tones.
pub enum BadgeVariant {
    /// Neutral filled badge.
    #[default]
    Default,
    /// Accent badge.
    Accent,
    /// Bordered badge.
    Outline,
    /// Muted badge.
    Muted,
}

impl BadgeVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Accent => "accent",
            Self::Outline => "outline",
            Self::Muted => "muted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Compact sizing scale shared by badges, headings, and steppers.
pub enum Size {
    /// Small.
    Sm,
    /// Default.
    #[default]
    Md,
    /// Large.
    Lg,
}

impl Size {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Alert severities.
pub enum AlertVariant {
    /// Failure.
    Error,
    /// Success.
    Success,
    /// Warning.
    Warning,
    /// Informational.
    #[default]
    Info,
}

impl AlertVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Error and warning interrupt assistive technology; the rest are polite.
    pub(crate) fn role(self) -> &'static str {
        match self {
            Self::Error | Self::Warning => "alert",
            Self::Success | Self::Info => "status",
        }
    }

    pub(crate) fn icon(self) -> IconName {
        match self {
            Self::Error => IconName::AlertCircle,
            Self::Success => IconName::CheckCircle,
            Self::Warning => IconName::AlertTriangle,
            Self::Info => IconName::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Container surface variants.
pub enum ContainerVariant {
    /// Glass surface.
    #[default]
    Default,
    /// Success-tinted surface.
    Success,
}

impl ContainerVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Section surface variants.
pub enum SectionVariant {
    /// Plain section.
    #[default]
    Default,
    /// Card-framed section.
    Card,
}

impl SectionVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Card => "card",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Root element rendered by [`Section`].
pub enum SectionElement {
    /// `<section>`.
    #[default]
    Section,
    /// `<div>`.
    Div,
    /// `<article>`.
    Article,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Heading levels.
pub enum HeadingLevel {
    /// `<h1>`.
    H1,
    /// `<h2>`.
    #[default]
    H2,
    /// `<h3>`.
    H3,
    /// `<h4>`.
    H4,
    /// `<h5>`.
    H5,
    /// `<h6>`.
    H6,
}

impl HeadingLevel {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Text tones.
pub enum TextTone {
    /// Primary text.
    #[default]
    Primary,
    /// Secondary text.
    Muted,
    /// Accent text.
    Accent,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Muted => "muted",
            Self::Accent => "accent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Layout axis for steppers and similar sequences.
pub enum Orientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Orientation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Progress state of one stepper step.
pub enum StepStatus {
    /// Before the current step.
    Complete,
    /// The current step.
    Current,
    /// After the current step.
    Upcoming,
}

impl StepStatus {
    /// Status of step `index` when `current` is the active step.
    pub fn for_step(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Less => Self::Complete,
            std::cmp::Ordering::Equal => Self::Current,
            std::cmp::Ordering::Greater => Self::Upcoming,
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Current => "current",
            Self::Upcoming => "upcoming",
        }
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

static NEXT_DOM_ID: AtomicU64 = AtomicU64::new(1);

/// Allocates a document-unique id such as `field-7`.
pub(crate) fn unique_dom_id(prefix: &str) -> String {
    format!("{prefix}-{}", NEXT_DOM_ID.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn step_status_is_relative_to_the_current_step() {
        let statuses: Vec<_> = (0..4).map(|index| StepStatus::for_step(index, 1)).collect();
        assert_eq!(
            statuses,
            vec![
                StepStatus::Complete,
                StepStatus::Current,
                StepStatus::Upcoming,
                StepStatus::Upcoming,
            ]
        );
    }

    #[test]
    fn only_urgent_alerts_use_the_alert_role() {
        assert_eq!(AlertVariant::Error.role(), "alert");
        assert_eq!(AlertVariant::Warning.role(), "alert");
        assert_eq!(AlertVariant::Success.role(), "status");
        assert_eq!(AlertVariant::Info.role(), "status");
    }

    #[test]
    fn dom_ids_are_unique_per_call() {
        let first = unique_dom_id("field");
        let second = unique_dom_id("field");
        assert!(first.starts_with("field-"));
        assert_ne!(first, second);
    }

    #[test]
    fn tokens_match_serialized_names() {
        assert_eq!(
            serde_json::to_string(&LinkVariant::Linkedin).ok(),
            Some(format!("\"{}\"", LinkVariant::Linkedin.token()))
        );
        assert_eq!(
            serde_json::to_string(&StepStatus::Upcoming).ok(),
            Some(format!("\"{}\"", StepStatus::Upcoming.token()))
        );
    }
}

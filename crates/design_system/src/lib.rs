//! Leptos design system with built-in focus management.
//!
//! The crate owns the focus-trap component and the modal built on it, a
//! class-name merge utility, an inline icon set, and the shared primitives
//! (controls, form fields, cards, typography, navigation, terminal surfaces).
//! Every primitive root exposes the stable `data-ui-*` DOM contract consumed by
//! the stylesheet layer. The trap's session logic lives in the headless
//! `focus_trap` crate; this crate adapts it to the browser document.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod a11y;
mod class_names;
mod icon;
mod overlays;
mod primitives;

pub use a11y::{FocusTarget, FocusTrap};
pub use class_names::{cn, ClassList};
pub use focus_trap::{TrapId, TrapKind};
pub use icon::{Icon, IconName, IconSize};
pub use overlays::CardModal;
pub use primitives::{
    Alert, AlertVariant, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardFooter, CardHeader, CardVariant, Checkbox, Container, ContainerVariant,
    ExternalLinkButton, FieldError, FieldHint, FieldIds, FieldLabel, FieldMessage, FieldRoot,
    Heading, HeadingLevel, InteractiveCard, Label, LinkButton, LinkSize, LinkVariant, NavItem,
    Orientation, Paragraph, Radio, Section, SectionElement, SectionVariant, SideNav, Size,
    StepItem, StepStatus, Stepper, TerminalBody, TerminalContainer, TerminalControls,
    TerminalHeader, TerminalWindowState, Text, TextArea, TextInput, TextTone, TypeWriter,
    TypewriterConfig, TypewriterState,
};

/// Convenience imports for application crates consuming the design system.
pub mod prelude {
    pub use crate::{
        cn, Alert, AlertVariant, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card,
        CardContent, CardFooter, CardHeader, CardModal, CardVariant, Checkbox, ClassList,
        Container, ContainerVariant, ExternalLinkButton, FieldError, FieldHint, FieldLabel,
        FieldRoot, FocusTarget, FocusTrap, Heading, HeadingLevel, Icon, IconName, IconSize,
        InteractiveCard, Label, LinkButton, LinkSize, LinkVariant, NavItem, Orientation,
        Paragraph, Radio, Section, SectionElement, SectionVariant, SideNav, Size, StepItem,
        StepStatus, Stepper, TerminalBody, TerminalContainer, TerminalControls, TerminalHeader,
        TerminalWindowState, Text, TextArea, TextInput, TextTone, TrapId, TrapKind, TypeWriter,
        TypewriterConfig,
    };
}

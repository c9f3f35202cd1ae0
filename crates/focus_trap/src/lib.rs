//! Headless focus containment for dialogs and other modal surfaces.
//!
//! The crate owns the trap session state machine, the focusable-element
//! predicate, the tab-boundary policy, and the precedence stack for nested
//! traps. It has no DOM dependency: the browser adapter in `design_system`
//! implements [`FocusHost`] over `web_sys`, and the tests here implement it
//! over an in-memory tree.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod focusable;
mod host;
mod key;
mod stack;
#[cfg(test)]
mod testing;
mod trap;

pub use focusable::{is_focusable, FocusCandidate, FOCUSABLE_SELECTOR};
pub use host::{FocusHost, ListenerGuard};
pub use key::{KeyModifiers, TabDirection};
pub use stack::{TrapId, TrapKind, TrapStack};
pub use trap::{
    Activation, FocusTrap, InitialPlacement, Restoration, TabOutcome, TrapOptions, TrapPhase,
};

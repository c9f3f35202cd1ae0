//! Precedence between simultaneously active traps.
//!
//! The most recently activated trap owns keyboard interception; traps beneath
//! it stay registered and resume when it is removed.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_TRAP_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of one trap instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrapId(pub u64);

impl TrapId {
    /// Allocates a fresh id.
    pub fn next() -> Self {
        Self(NEXT_TRAP_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TrapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trap-{}", self.0)
    }
}

/// Role of a registered trap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrapKind {
    /// Confines Tab only.
    #[default]
    Plain,
    /// Also owns Escape-to-close for its dialog.
    Modal,
}

/// Ordered registry of active traps, last activated on top.
///
/// Tab interception follows the overall top; Escape follows the topmost
/// [`TrapKind::Modal`] entry, so a plain trap inside a dialog body does not
/// swallow the dialog's close key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrapStack {
    entries: Vec<(TrapId, TrapKind)>,
}

impl TrapStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `id` on top. An id already on the stack is moved to the top.
    pub fn push(&mut self, id: TrapId, kind: TrapKind) {
        self.entries.retain(|(existing, _)| *existing != id);
        self.entries.push((id, kind));
    }

    /// Removes `id` wherever it sits. Returns whether it was present.
    pub fn remove(&mut self, id: TrapId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(existing, _)| *existing != id);
        self.entries.len() != before
    }

    /// The trap currently owning interception.
    pub fn top(&self) -> Option<TrapId> {
        self.entries.last().map(|(id, _)| *id)
    }

    /// The most recently activated modal.
    pub fn top_modal(&self) -> Option<TrapId> {
        self.entries
            .iter()
            .rev()
            .find(|(_, kind)| *kind == TrapKind::Modal)
            .map(|(id, _)| *id)
    }

    /// Whether `id` is the trap currently owning interception.
    pub fn is_topmost(&self, id: TrapId) -> bool {
        self.top() == Some(id)
    }

    /// Whether `id` is the modal currently owning Escape.
    pub fn is_topmost_modal(&self, id: TrapId) -> bool {
        self.top_modal() == Some(id)
    }

    /// Number of registered traps.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no trap is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn last_pushed_trap_is_topmost_and_inner_removal_resumes_outer() {
        let outer = TrapId(10);
        let inner = TrapId(11);
        let mut stack = TrapStack::new();

        stack.push(outer, TrapKind::Plain);
        stack.push(inner, TrapKind::Plain);
        assert!(stack.is_topmost(inner));
        assert!(!stack.is_topmost(outer));

        assert!(stack.remove(inner));
        assert!(stack.is_topmost(outer));
        assert!(!stack.remove(inner));
    }

    #[test]
    fn removing_a_buried_trap_keeps_the_top() {
        let mut stack = TrapStack::new();
        stack.push(TrapId(1), TrapKind::Plain);
        stack.push(TrapId(2), TrapKind::Plain);
        stack.push(TrapId(3), TrapKind::Plain);

        assert!(stack.remove(TrapId(2)));
        assert_eq!(stack.top(), Some(TrapId(3)));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn repushing_moves_to_top_without_duplicates() {
        let mut stack = TrapStack::new();
        stack.push(TrapId(1), TrapKind::Plain);
        stack.push(TrapId(2), TrapKind::Plain);
        stack.push(TrapId(1), TrapKind::Plain);

        assert_eq!(stack.len(), 2);
        assert!(stack.is_topmost(TrapId(1)));
    }

    #[test]
    fn plain_trap_inside_a_modal_keeps_tab_but_not_escape() {
        let outer_modal = TrapId(20);
        let inner_modal = TrapId(21);
        let panel = TrapId(22);
        let mut stack = TrapStack::new();

        stack.push(outer_modal, TrapKind::Modal);
        stack.push(inner_modal, TrapKind::Modal);
        stack.push(panel, TrapKind::Plain);

        assert!(stack.is_topmost(panel));
        assert!(!stack.is_topmost_modal(panel));
        assert_eq!(stack.top_modal(), Some(inner_modal));
        assert!(!stack.is_topmost_modal(outer_modal));

        stack.remove(inner_modal);
        assert!(stack.is_topmost(panel));
        assert!(stack.is_topmost_modal(outer_modal));

        stack.remove(outer_modal);
        assert_eq!(stack.top_modal(), None);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn allocated_ids_are_distinct() {
        let first = TrapId::next();
        let second = TrapId::next();
        assert!(first != second);
        assert_eq!(TrapId(7).to_string(), "trap-7");
        assert!(TrapStack::new().is_empty());
        assert!(!TrapStack::new().is_topmost(first));
    }
}

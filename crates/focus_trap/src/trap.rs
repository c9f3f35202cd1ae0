//! Trap session state machine.
//!
//! `inactive -> activating -> active -> restoring -> inactive`. Each transition
//! runs synchronously inside the caller, so the intermediate phases are only
//! observable from host callbacks made during the transition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{FocusHost, ListenerGuard, TabDirection};

/// Caller-supplied targets for one activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrapOptions<E> {
    /// Element to focus on activation instead of the first focusable descendant.
    pub initial_focus: Option<E>,
    /// Element to focus on deactivation instead of the pre-activation element.
    pub return_focus: Option<E>,
}

impl<E> Default for TrapOptions<E> {
    fn default() -> Self {
        Self {
            initial_focus: None,
            return_focus: None,
        }
    }
}

/// Lifecycle phase of a [`FocusTrap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrapPhase {
    /// No session.
    Inactive,
    /// Capturing the previous element and placing initial focus.
    Activating,
    /// Intercepting boundary tab presses.
    Active,
    /// Listener released, focus being restored.
    Restoring,
}

/// Where initial focus landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitialPlacement {
    /// The explicit initial-focus target.
    Explicit,
    /// The first focusable descendant of the root.
    FirstFocusable,
    /// Nothing to focus; focus was left where it was.
    Unmoved,
}

/// Result of [`FocusTrap::activate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A new session started.
    Started(InitialPlacement),
    /// A session was already running; nothing changed.
    AlreadyActive,
}

/// Result of [`FocusTrap::deactivate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Restoration {
    /// Focus returned to the explicit return target.
    ReturnTarget,
    /// Focus returned to the element focused before activation.
    PreviousElement,
    /// Neither target was available or attached; focus untouched.
    Skipped,
    /// No session was running; nothing changed.
    NotActive,
}

/// Result of [`FocusTrap::handle_tab`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabOutcome {
    /// The trap moved focus; the caller must prevent the default navigation.
    Wrapped,
    /// Native tab order applies.
    PassThrough,
}

impl TabOutcome {
    /// Whether the key event's default action must be prevented.
    pub fn is_intercepted(self) -> bool {
        matches!(self, Self::Wrapped)
    }
}

struct Session<E> {
    root: E,
    previous: Option<E>,
    return_focus: Option<E>,
}

/// Focus containment controller for one rendered subtree.
///
/// Dropping an active trap ends its session exactly like [`FocusTrap::deactivate`].
pub struct FocusTrap<H: FocusHost> {
    host: H,
    phase: TrapPhase,
    session: Option<Session<H::Element>>,
    listener: Option<ListenerGuard>,
}

impl<H: FocusHost> FocusTrap<H> {
    /// Creates an inactive trap over `host`.
    pub fn new(host: H) -> Self {
        Self {
            host,
            phase: TrapPhase::Inactive,
            session: None,
            listener: None,
        }
    }

    /// The document host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> TrapPhase {
        self.phase
    }

    /// Whether a session is intercepting tab presses.
    pub fn is_active(&self) -> bool {
        self.phase == TrapPhase::Active
    }

    /// Root of the running session.
    pub fn root(&self) -> Option<&H::Element> {
        self.session.as_ref().map(|session| &session.root)
    }

    /// Starts a session over `root`.
    ///
    /// Captures the focused element as the restoration fallback, places initial
    /// focus, then calls `install` to register the key listener. The returned
    /// guard is held until the session ends.
    pub fn activate(
        &mut self,
        root: H::Element,
        options: TrapOptions<H::Element>,
        install: impl FnOnce() -> ListenerGuard,
    ) -> Activation {
        if self.phase != TrapPhase::Inactive {
            return Activation::AlreadyActive;
        }

        self.phase = TrapPhase::Activating;
        let previous = self.host.active_element();
        let placement = self.place_initial_focus(&root, options.initial_focus.as_ref());
        self.session = Some(Session {
            root,
            previous,
            return_focus: options.return_focus,
        });
        self.listener = Some(install());
        self.phase = TrapPhase::Active;
        Activation::Started(placement)
    }

    fn place_initial_focus(
        &self,
        root: &H::Element,
        initial_focus: Option<&H::Element>,
    ) -> InitialPlacement {
        if let Some(target) = initial_focus.filter(|target| self.host.is_attached(target)) {
            self.host.focus(target);
            return InitialPlacement::Explicit;
        }

        match self.host.focusable_within(root).first() {
            Some(first) => {
                self.host.focus(first);
                InitialPlacement::FirstFocusable
            }
            None => InitialPlacement::Unmoved,
        }
    }

    /// Applies the boundary policy to one tab press.
    ///
    /// The focusable set is queried fresh on every call. Focus that has left
    /// the subtree is pulled back to the edge matching `direction`. Shift+Tab
    /// from the root element itself wraps to the last focusable.
    pub fn handle_tab(&self, direction: TabDirection) -> TabOutcome {
        if self.phase != TrapPhase::Active {
            return TabOutcome::PassThrough;
        }
        let Some(session) = self.session.as_ref() else {
            return TabOutcome::PassThrough;
        };

        let focusable = self.host.focusable_within(&session.root);
        let (Some(first), Some(last)) = (focusable.first(), focusable.last()) else {
            return TabOutcome::PassThrough;
        };

        let active = self.host.active_element();
        let escaped = match active.as_ref() {
            Some(active) => !self.host.contains(&session.root, active),
            None => true,
        };

        let target = match direction {
            TabDirection::Forward if escaped => first,
            TabDirection::Backward if escaped => last,
            TabDirection::Backward if active.as_ref() == Some(&session.root) => last,
            TabDirection::Forward if active.as_ref() == Some(last) => first,
            TabDirection::Backward if active.as_ref() == Some(first) => last,
            _ => return TabOutcome::PassThrough,
        };

        self.host.focus(target);
        TabOutcome::Wrapped
    }

    /// Ends the running session. Calling it while inactive is a no-op.
    ///
    /// The listener is released before any focus moves.
    pub fn deactivate(&mut self) -> Restoration {
        if self.phase != TrapPhase::Active {
            return Restoration::NotActive;
        }

        self.phase = TrapPhase::Restoring;
        if let Some(listener) = self.listener.take() {
            listener.release();
        }
        let outcome = match self.session.take() {
            Some(session) => self.restore(session),
            None => Restoration::Skipped,
        };
        self.phase = TrapPhase::Inactive;
        outcome
    }

    fn restore(&self, session: Session<H::Element>) -> Restoration {
        if let Some(target) = session
            .return_focus
            .filter(|target| self.host.is_attached(target))
        {
            self.host.focus(&target);
            return Restoration::ReturnTarget;
        }

        if let Some(previous) = session
            .previous
            .filter(|previous| self.host.is_attached(previous))
        {
            self.host.focus(&previous);
            return Restoration::PreviousElement;
        }

        Restoration::Skipped
    }
}

impl<H: FocusHost> fmt::Debug for FocusTrap<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusTrap")
            .field("phase", &self.phase)
            .field("has_session", &self.session.is_some())
            .field("listener", &self.listener)
            .finish()
    }
}

impl<H: FocusHost> Drop for FocusTrap<H> {
    fn drop(&mut self) {
        let _ = self.deactivate();
    }
}

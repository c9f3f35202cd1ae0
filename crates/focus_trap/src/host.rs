//! Document abstraction and the owned key-listener resource.

use std::fmt;

/// Document operations a focus trap needs.
///
/// The browser adapter implements this over `web_sys`; tests implement it over
/// an in-memory tree. Elements are cheap handles compared by identity.
pub trait FocusHost {
    /// Element handle type.
    type Element: Clone + PartialEq;

    /// Returns the currently focused element, if it is an element that can be
    /// handed back to [`FocusHost::focus`] later.
    fn active_element(&self) -> Option<Self::Element>;

    /// Returns the focusable descendants of `root` in document order.
    ///
    /// Implementations must query the live tree on every call.
    fn focusable_within(&self, root: &Self::Element) -> Vec<Self::Element>;

    /// Moves focus to `element`. Failures are swallowed by the host.
    fn focus(&self, element: &Self::Element);

    /// Returns whether `element` is still attached to the document.
    fn is_attached(&self, element: &Self::Element) -> bool;

    /// Returns whether `element` is `root` or one of its descendants.
    fn contains(&self, root: &Self::Element, element: &Self::Element) -> bool;
}

/// Owned registration of the key-interception listener.
///
/// The release action runs exactly once: either through [`ListenerGuard::release`]
/// or when the guard is dropped, so abrupt teardown cannot leak the listener.
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    /// Wraps the action that unregisters the listener.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release.
    pub fn detached() -> Self {
        Self { release: None }
    }

    /// Unregisters the listener now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn release_runs_once_whether_explicit_or_dropped() {
        let released = Rc::new(Cell::new(0));

        let counter = released.clone();
        let guard = ListenerGuard::new(move || counter.set(counter.get() + 1));
        guard.release();
        assert_eq!(released.get(), 1);

        let counter = released.clone();
        drop(ListenerGuard::new(move || counter.set(counter.get() + 1)));
        assert_eq!(released.get(), 2);
    }

    #[test]
    fn detached_guard_is_inert() {
        let guard = ListenerGuard::detached();
        assert_eq!(format!("{guard:?}"), "ListenerGuard { armed: false }");
        guard.release();
    }
}

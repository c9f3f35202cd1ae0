use std::cell::RefCell;
use std::mem;

use leptos::logging;

use super::dom::{body, DomError};

const OVERFLOW: &str = "overflow";

/// Reference count of live scroll locks plus the snapshot taken by the first.
#[derive(Debug, Default, PartialEq, Eq)]
struct LockCount {
    holders: usize,
    previous: String,
}

impl LockCount {
    fn needs_snapshot(&self) -> bool {
        self.holders == 0
    }

    /// Registers a holder. Only the first holder supplies a snapshot.
    fn hold(&mut self, snapshot: Option<String>) {
        if let Some(snapshot) = snapshot {
            self.previous = snapshot;
        }
        self.holders += 1;
    }

    /// Drops a holder; returns the value to restore once the last one leaves.
    fn release(&mut self) -> Option<String> {
        if self.holders == 0 {
            return None;
        }
        self.holders -= 1;
        (self.holders == 0).then(|| mem::take(&mut self.previous))
    }
}

thread_local! {
    static SCROLL_LOCKS: RefCell<LockCount> = RefCell::new(LockCount::default());
}

/// Holds `overflow: hidden` on the document body until dropped.
///
/// Locks are counted per thread. The first acquire snapshots the inline
/// `overflow` value and the last release restores it, whatever order the
/// holders drop in.
#[derive(Debug)]
pub struct ScrollLock {
    body: web_sys::HtmlElement,
}

impl ScrollLock {
    /// Locks page scrolling.
    pub fn acquire() -> Result<Self, DomError> {
        let body = body()?;
        if SCROLL_LOCKS.with(|locks| locks.borrow().needs_snapshot()) {
            let style = body.style();
            let previous = style
                .get_property_value(OVERFLOW)
                .map_err(|err| DomError::js("getPropertyValue", err))?;
            style
                .set_property(OVERFLOW, "hidden")
                .map_err(|err| DomError::js("setProperty", err))?;
            SCROLL_LOCKS.with(|locks| locks.borrow_mut().hold(Some(previous)));
        } else {
            SCROLL_LOCKS.with(|locks| locks.borrow_mut().hold(None));
        }
        Ok(Self { body })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let Some(previous) = SCROLL_LOCKS.with(|locks| locks.borrow_mut().release()) else {
            return;
        };
        let style = self.body.style();
        let result = if previous.is_empty() {
            style.remove_property(OVERFLOW).map(|_| ())
        } else {
            style.set_property(OVERFLOW, &previous)
        };
        if let Err(err) = result {
            logging::warn!("scroll lock release failed: {}", DomError::js("setProperty", err));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn out_of_order_release_restores_the_first_snapshot_once() {
        let mut locks = LockCount::default();
        assert!(locks.needs_snapshot());
        locks.hold(Some(String::new()));

        assert!(!locks.needs_snapshot());
        locks.hold(None);

        // Outer holder leaves first; the inner one is still open.
        assert_eq!(locks.release(), None);
        assert_eq!(locks.release(), Some(String::new()));
        assert!(locks.needs_snapshot());
    }

    #[test]
    fn inline_value_present_before_locking_comes_back() {
        let mut locks = LockCount::default();
        locks.hold(Some("scroll".to_string()));
        locks.hold(None);
        locks.hold(None);

        assert_eq!(locks.release(), None);
        assert_eq!(locks.release(), None);
        assert_eq!(locks.release(), Some("scroll".to_string()));
        assert_eq!(locks, LockCount::default());
    }

    #[test]
    fn unbalanced_release_is_ignored() {
        let mut locks = LockCount::default();
        assert_eq!(locks.release(), None);
        locks.hold(Some("auto".to_string()));
        assert_eq!(locks.release(), Some("auto".to_string()));
        assert_eq!(locks.release(), None);
    }
}

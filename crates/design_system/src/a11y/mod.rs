//! Accessibility primitives: the focus-trap component, its DOM focus host,
//! and the body scroll lock used by modal surfaces.

mod dom;
mod scroll_lock;
mod trap;

pub use dom::{active_html_element, focus_html_element, focusable_descendants, DomError, DomFocusHost};
pub use scroll_lock::ScrollLock;
pub use trap::{is_topmost_modal, is_topmost_trap, FocusTarget, FocusTrap};

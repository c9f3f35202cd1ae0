//! Leptos focus-trap component wired to the headless session controller.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use focus_trap::{
    Activation, FocusTrap as TrapController, InitialPlacement, KeyModifiers, ListenerGuard,
    Restoration, TabDirection, TrapId, TrapKind, TrapOptions, TrapStack,
};
use leptos::*;

use super::dom::DomFocusHost;
use crate::class_names::merge_class;

type SharedController = Rc<RefCell<TrapController<DomFocusHost>>>;

thread_local! {
    static ACTIVE_TRAPS: RefCell<TrapStack> = RefCell::new(TrapStack::new());
}

/// Whether `id` belongs to the most recently activated trap still running.
pub fn is_topmost_trap(id: TrapId) -> bool {
    ACTIVE_TRAPS.with(|stack| stack.borrow().is_topmost(id))
}

/// Whether `id` belongs to the most recently activated modal trap still
/// running. Plain traps above it do not count.
pub fn is_topmost_modal(id: TrapId) -> bool {
    ACTIVE_TRAPS.with(|stack| stack.borrow().is_topmost_modal(id))
}

/// Lazily resolved element reference for initial and return focus.
///
/// Resolution happens at the moment the trap needs the element, so a
/// `NodeRef` that loads after the trap renders still works.
#[derive(Clone)]
pub struct FocusTarget(Rc<dyn Fn() -> Option<web_sys::HtmlElement>>);

impl FocusTarget {
    /// Wraps a resolver.
    pub fn new(resolve: impl Fn() -> Option<web_sys::HtmlElement> + 'static) -> Self {
        Self(Rc::new(resolve))
    }

    /// Current element, if any.
    pub fn resolve(&self) -> Option<web_sys::HtmlElement> {
        (self.0)()
    }
}

impl fmt::Debug for FocusTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FocusTarget(..)")
    }
}

impl From<web_sys::HtmlElement> for FocusTarget {
    fn from(element: web_sys::HtmlElement) -> Self {
        Self::new(move || Some(element.clone()))
    }
}

macro_rules! focus_target_from_node_ref {
    ($($element:ty),* $(,)?) => {
        $(
            impl From<NodeRef<$element>> for FocusTarget {
                fn from(node_ref: NodeRef<$element>) -> Self {
                    Self::new(move || {
                        node_ref.get_untracked().map(|element| {
                            let element: &web_sys::HtmlElement = &element;
                            element.clone()
                        })
                    })
                }
            }
        )*
    };
}

focus_target_from_node_ref!(html::Button, html::Input, html::A, html::Div, html::Textarea);

fn install_tab_listener(
    trap_id: TrapId,
    kind: TrapKind,
    controller: Weak<RefCell<TrapController<DomFocusHost>>>,
) -> ListenerGuard {
    ACTIVE_TRAPS.with(|stack| stack.borrow_mut().push(trap_id, kind));

    let handle = window_event_listener(ev::keydown, move |ev| {
        let modifiers = KeyModifiers {
            shift: ev.shift_key(),
            ctrl: ev.ctrl_key(),
            alt: ev.alt_key(),
            meta: ev.meta_key(),
        };
        let Some(direction) = TabDirection::from_key(&ev.key(), modifiers) else {
            return;
        };
        if ev.default_prevented() || !is_topmost_trap(trap_id) {
            return;
        }
        let Some(controller) = controller.upgrade() else {
            return;
        };
        let Ok(trap) = controller.try_borrow() else {
            return;
        };
        if trap.handle_tab(direction).is_intercepted() {
            ev.prevent_default();
        }
    });

    ListenerGuard::new(move || {
        handle.remove();
        ACTIVE_TRAPS.with(|stack| {
            stack.borrow_mut().remove(trap_id);
        });
    })
}

fn activate(
    controller: &SharedController,
    trap_id: TrapId,
    kind: TrapKind,
    root: web_sys::HtmlElement,
    options: TrapOptions<web_sys::HtmlElement>,
) {
    let Ok(mut trap) = controller.try_borrow_mut() else {
        logging::warn!("{trap_id} is busy; activation dropped");
        return;
    };
    let weak = Rc::downgrade(controller);
    match trap.activate(root, options, move || install_tab_listener(trap_id, kind, weak)) {
        Activation::Started(InitialPlacement::Unmoved) => {
            logging::debug_warn!("{trap_id} has no focusable content; focus left in place");
        }
        Activation::Started(_) | Activation::AlreadyActive => {}
    }
}

fn deactivate(controller: &SharedController, trap_id: TrapId) {
    let Ok(mut trap) = controller.try_borrow_mut() else {
        // A focus handler re-entered while the trap was moving focus.
        let controller = Rc::clone(controller);
        set_timeout(move || deactivate(&controller, trap_id), Duration::ZERO);
        return;
    };
    if trap.deactivate() == Restoration::Skipped {
        logging::debug_warn!("{trap_id} had no attached element to restore focus to");
    }
}

#[component]
/// Confines Tab navigation to its children while `active`, restoring focus on
/// deactivation or unmount.
///
/// Initial focus goes to `initial_focus` when it resolves to an attached
/// element, else to the first focusable child. On deactivation focus returns to
/// `return_focus`, else to whatever was focused before activation.
pub fn FocusTrap(
    /// Drives activation; defaults to active.
    #[prop(default = MaybeSignal::Static(true), into)]
    active: MaybeSignal<bool>,
    /// Element to focus on activation.
    #[prop(optional, into)]
    initial_focus: Option<FocusTarget>,
    /// Element to focus on deactivation.
    #[prop(optional, into)]
    return_focus: Option<FocusTarget>,
    /// Identity on the shared trap stack; allocated when omitted.
    #[prop(optional)]
    trap_id: Option<TrapId>,
    /// Registration role; modal surfaces pass [`TrapKind::Modal`].
    #[prop(optional)]
    kind: TrapKind,
    /// Layout-only class hook.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Protected subtree.
    children: Children,
) -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let trap_id = trap_id.unwrap_or_else(TrapId::next);
    let controller: SharedController = Rc::new(RefCell::new(TrapController::new(DomFocusHost)));

    create_effect({
        let controller = Rc::clone(&controller);
        move |_| {
            let is_active = active.get();
            let Some(root) = container.get() else {
                return;
            };
            if !is_active {
                deactivate(&controller, trap_id);
                return;
            }

            let root: web_sys::HtmlElement = {
                let root: &web_sys::HtmlElement = &root;
                root.clone()
            };
            let controller = Rc::clone(&controller);
            let initial_focus = initial_focus.clone();
            let return_focus = return_focus.clone();
            // Defer until the subtree is attached to the document.
            set_timeout(
                move || {
                    if !root.is_connected() || active.try_get_untracked() != Some(true) {
                        return;
                    }
                    let options = TrapOptions {
                        initial_focus: initial_focus.as_ref().and_then(FocusTarget::resolve),
                        return_focus: return_focus.as_ref().and_then(FocusTarget::resolve),
                    };
                    activate(&controller, trap_id, kind, root, options);
                },
                Duration::ZERO,
            );
        }
    });

    on_cleanup({
        let controller = Rc::clone(&controller);
        move || deactivate(&controller, trap_id)
    });

    view! {
        <div
            node_ref=container
            class=merge_class("ui-focus-trap", layout_class)
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="focus-trap"
            data-ui-trap=trap_id.to_string()
            data-ui-state=move || if active.get() { "active" } else { "inactive" }
        >
            {children()}
        </div>
    }
}

//! Modal surfaces built on the focus trap.

use std::cell::RefCell;
use std::rc::Rc;

use focus_trap::{TrapId, TrapKind};
use leptos::ev::MouseEvent;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::a11y::{is_topmost_modal, FocusTarget, FocusTrap, ScrollLock};
use crate::class_names::merge_class;
use crate::primitives::unique_dom_id;
use crate::{Icon, IconName, IconSize};

fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Whether a keydown should close the modal: an unhandled Escape while the
/// modal is open and owns the top of the modal stack.
fn escape_closes(key: &str, default_prevented: bool, open: bool, topmost_modal: bool) -> bool {
    is_escape(key) && !default_prevented && open && topmost_modal
}

/// Whether a click that reached the backdrop should close the modal. Presses
/// that landed inside the card (including nested dialogs rendered there) do
/// not close it.
fn backdrop_press_closes<E>(
    card: Option<&E>,
    target: Option<&E>,
    contains: impl Fn(&E, &E) -> bool,
) -> bool {
    match (card, target) {
        (Some(card), Some(target)) => !contains(card, target),
        _ => true,
    }
}

#[component]
/// Titled dialog card rendered over a backdrop while `open`.
///
/// While open the modal traps focus (its close button receives initial
/// focus), locks body scroll, and closes through `on_close` on Escape, on the
/// close button, or on a backdrop click. Clicks inside the card never close
/// it. When nested, only the topmost modal reacts to Escape, even when a plain
/// trap inside its body holds Tab. Focus
/// returns to `return_focus` on close, else to the element focused before
/// opening.
pub fn CardModal(
    /// Visibility.
    #[prop(into)]
    open: MaybeSignal<bool>,
    /// Invoked for every close request; the caller flips `open`.
    #[prop(into)]
    on_close: Callback<()>,
    /// Heading text, also the dialog's accessible name.
    #[prop(into)]
    title: String,
    /// Decorative icon before the title.
    #[prop(optional)]
    icon: Option<IconName>,
    /// Element to focus after closing.
    #[prop(optional, into)]
    return_focus: Option<FocusTarget>,
    /// Accessible name of the close button.
    #[prop(default = "Close dialog".to_string(), into)]
    close_label: String,
    /// Layout-only class hook for the card.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Card body.
    children: ChildrenFn,
) -> impl IntoView {
    let trap_id = TrapId::next();
    let title_id = unique_dom_id("modal-title");
    let description_id = unique_dom_id("modal-description");
    let close_button = create_node_ref::<html::Button>();
    let card = create_node_ref::<html::Div>();
    let return_focus = FocusTarget::new(move || return_focus.as_ref().and_then(FocusTarget::resolve));

    let scroll_lock: Rc<RefCell<Option<ScrollLock>>> = Rc::new(RefCell::new(None));
    create_effect({
        let scroll_lock = Rc::clone(&scroll_lock);
        move |_| {
            let is_open = open.get();
            let mut lock = scroll_lock.borrow_mut();
            if !is_open {
                lock.take();
                return;
            }
            if lock.is_none() {
                match ScrollLock::acquire() {
                    Ok(acquired) => *lock = Some(acquired),
                    Err(err) => logging::warn!("modal could not lock page scroll: {err}"),
                }
            }
        }
    });
    on_cleanup(move || {
        scroll_lock.borrow_mut().take();
    });

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        let topmost = is_topmost_modal(trap_id);
        if escape_closes(&ev.key(), ev.default_prevented(), open.get_untracked(), topmost) {
            ev.prevent_default();
            on_close.call(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    let dialog = move || {
        let title_id = title_id.clone();
        let description_id = description_id.clone();
        let title = title.clone();
        let close_label = close_label.clone();
        let return_focus = return_focus.clone();
        let children = children.clone();
        view! {
            <div
                class="ui-modal-backdrop"
                role="dialog"
                aria-modal="true"
                aria-labelledby=title_id.clone()
                aria-describedby=description_id.clone()
                data-ui-primitive="true"
                data-ui-kind="card-modal"
                on:click=move |ev: MouseEvent| {
                    let target = ev.target().and_then(|target| target.dyn_into::<web_sys::Node>().ok());
                    let card = card.get_untracked().map(|card| {
                        let card: &web_sys::Node = &card;
                        card.clone()
                    });
                    if backdrop_press_closes(card.as_ref(), target.as_ref(), |card, target| {
                        card.contains(Some(target))
                    }) {
                        on_close.call(());
                    }
                }
            >
                <FocusTrap
                    active=open
                    trap_id=trap_id
                    kind=TrapKind::Modal
                    initial_focus=close_button
                    return_focus=return_focus
                    layout_class="ui-modal-trap"
                >
                    <div
                        node_ref=card
                        class=merge_class("ui-modal-card", layout_class)
                        data-ui-slot="card"
                    >
                        <div class="ui-modal-header">
                            <div class="ui-modal-title-row">
                                {icon.map(|icon| view! { <Icon icon size=IconSize::Lg layout_class="ui-modal-icon" /> })}
                                <h2 id=title_id class="ui-modal-title">{title.clone()}</h2>
                            </div>
                            <button
                                node_ref=close_button
                                type="button"
                                class="ui-modal-close"
                                aria-label=close_label
                                on:click=move |_| on_close.call(())
                            >
                                <Icon icon=IconName::Close size=IconSize::Lg />
                            </button>
                        </div>
                        <div id=description_id class="ui-sr-only">
                            {format!("Dialog content: {title}")}
                        </div>
                        <div class="ui-modal-body">{children()}</div>
                    </div>
                </FocusTrap>
            </div>
        }
    };

    view! { <Show when=move || open.get()>{dialog()}</Show> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_matches_both_key_names() {
        assert!(is_escape("Escape"));
        assert!(is_escape("Esc"));
        assert!(!is_escape("Enter"));
    }

    #[test]
    fn escape_closes_only_the_open_topmost_modal() {
        assert!(escape_closes("Escape", false, true, true));
        assert!(!escape_closes("Escape", false, true, false));
        assert!(!escape_closes("Escape", false, false, true));
        assert!(!escape_closes("Escape", true, true, true));
        assert!(!escape_closes("Tab", false, true, true));
    }

    #[test]
    fn escape_reaches_the_modal_under_a_plain_trap() {
        let outer = TrapId(900);
        let panel = TrapId(901);
        let mut stack = focus_trap::TrapStack::new();
        stack.push(outer, TrapKind::Modal);
        stack.push(panel, TrapKind::Plain);

        assert!(escape_closes("Escape", false, true, stack.is_topmost_modal(outer)));
        assert!(!stack.is_topmost(outer));
    }

    // Paths model the DOM: an element contains every path it prefixes.
    fn path_contains(ancestor: &&str, node: &&str) -> bool {
        node.starts_with(ancestor)
    }

    #[test]
    fn backdrop_press_outside_the_card_closes() {
        let card = "body/backdrop/trap/card";
        assert!(backdrop_press_closes(Some(&card), Some(&"body/backdrop"), path_contains));
        assert!(backdrop_press_closes(Some(&card), Some(&"body/backdrop/trap"), path_contains));
    }

    #[test]
    fn press_inside_the_card_keeps_the_modal_open() {
        let card = "body/backdrop/trap/card";
        assert!(!backdrop_press_closes(Some(&card), Some(&card), path_contains));
        assert!(!backdrop_press_closes(
            Some(&card),
            Some(&"body/backdrop/trap/card/body/nested-backdrop"),
            path_contains
        ));
    }

    #[test]
    fn press_without_a_resolved_card_or_target_closes() {
        let card = "body/backdrop/trap/card";
        assert!(backdrop_press_closes(None, Some(&card), path_contains));
        assert!(backdrop_press_closes(Some(&card), None, path_contains));
    }
}

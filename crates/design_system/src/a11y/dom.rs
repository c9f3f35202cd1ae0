//! `web_sys` implementation of the focus host and shared DOM helpers.

use focus_trap::{is_focusable, FocusCandidate, FocusHost, FOCUSABLE_SELECTOR};
use leptos::logging;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failures of best-effort DOM calls made by the accessibility helpers.
pub enum DomError {
    /// No `window` global (non-browser target).
    #[error("browser window is unavailable")]
    NoWindow,
    /// The window has no document.
    #[error("document is unavailable")]
    NoDocument,
    /// The document has no `<body>` yet.
    #[error("document has no body")]
    NoBody,
    /// A DOM method threw.
    #[error("`{operation}` failed: {message}")]
    Js {
        /// DOM method name.
        operation: &'static str,
        /// Stringified JS exception.
        message: String,
    },
}

impl DomError {
    pub(crate) fn js(operation: &'static str, err: JsValue) -> Self {
        Self::Js {
            operation,
            message: err.as_string().unwrap_or_else(|| format!("{err:?}")),
        }
    }
}

pub(crate) fn document() -> Result<web_sys::Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

pub(crate) fn body() -> Result<web_sys::HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

/// Returns the current active element as an [`web_sys::HtmlElement`] when possible.
pub fn active_html_element() -> Option<web_sys::HtmlElement> {
    document()
        .ok()
        .and_then(|document| document.active_element())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Focuses an HTML element.
pub fn focus_html_element(element: &web_sys::HtmlElement) -> Result<(), DomError> {
    element.focus().map_err(|err| DomError::js("focus", err))
}

fn is_focusable_element(element: &web_sys::Element) -> bool {
    let tag_name = element.tag_name();
    let tab_index = element.get_attribute("tabindex");
    let input_type = element.get_attribute("type");
    is_focusable(&FocusCandidate {
        tag_name: &tag_name,
        has_href: element.has_attribute("href"),
        disabled: element.has_attribute("disabled"),
        tab_index: tab_index.as_deref(),
        input_type: input_type.as_deref(),
        hidden: element.has_attribute("hidden"),
    })
}

/// Focusable descendants of `root` in document order, queried from the live tree.
pub fn focusable_descendants(root: &web_sys::Element) -> Result<Vec<web_sys::HtmlElement>, DomError> {
    let nodes = root
        .query_selector_all(FOCUSABLE_SELECTOR)
        .map_err(|err| DomError::js("querySelectorAll", err))?;

    let mut items = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(item) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        if is_focusable_element(&item) {
            items.push(item);
        }
    }
    Ok(items)
}

#[derive(Debug, Clone, Copy, Default)]
/// Focus host backed by the browser document.
pub struct DomFocusHost;

impl FocusHost for DomFocusHost {
    type Element = web_sys::HtmlElement;

    fn active_element(&self) -> Option<web_sys::HtmlElement> {
        active_html_element()
    }

    fn focusable_within(&self, root: &web_sys::HtmlElement) -> Vec<web_sys::HtmlElement> {
        focusable_descendants(root).unwrap_or_else(|err| {
            logging::warn!("focus trap query failed: {err}");
            Vec::new()
        })
    }

    fn focus(&self, element: &web_sys::HtmlElement) {
        if let Err(err) = focus_html_element(element) {
            logging::warn!("focus trap could not move focus: {err}");
        }
    }

    fn is_attached(&self, element: &web_sys::HtmlElement) -> bool {
        element.is_connected()
    }

    fn contains(&self, root: &web_sys::HtmlElement, element: &web_sys::HtmlElement) -> bool {
        let node: &web_sys::Node = element;
        root.contains(Some(node))
    }
}

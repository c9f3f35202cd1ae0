//! In-memory document used by the state-machine tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{is_focusable, FocusCandidate, FocusHost};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FakeNode(usize);

#[derive(Debug)]
struct NodeData {
    label: String,
    tag: &'static str,
    has_href: bool,
    disabled: bool,
    tab_index: Option<&'static str>,
    parent: Option<usize>,
    children: Vec<usize>,
    detached: bool,
}

#[derive(Debug, Default)]
struct Inner {
    nodes: Vec<NodeData>,
    active: Option<usize>,
    journal: Vec<String>,
}

/// Shared handle to a tiny DOM-like tree rooted at a `body` node.
#[derive(Debug, Clone)]
pub(crate) struct FakeDocument {
    inner: Rc<RefCell<Inner>>,
}

impl FakeDocument {
    pub(crate) fn new() -> Self {
        let doc = Self {
            inner: Rc::new(RefCell::new(Inner::default())),
        };
        doc.inner.borrow_mut().nodes.push(NodeData {
            label: "body".to_string(),
            tag: "body",
            has_href: false,
            disabled: false,
            tab_index: None,
            parent: None,
            children: Vec::new(),
            detached: false,
        });
        doc
    }

    pub(crate) fn body(&self) -> FakeNode {
        FakeNode(0)
    }

    fn insert(&self, parent: FakeNode, label: &str, tag: &'static str) -> FakeNode {
        let mut inner = self.inner.borrow_mut();
        let id = inner.nodes.len();
        inner.nodes.push(NodeData {
            label: label.to_string(),
            tag,
            has_href: false,
            disabled: false,
            tab_index: None,
            parent: Some(parent.0),
            children: Vec::new(),
            detached: false,
        });
        inner.nodes[parent.0].children.push(id);
        FakeNode(id)
    }

    /// Appends a plain container (`div`, no tab index).
    pub(crate) fn container(&self, parent: FakeNode, label: &str) -> FakeNode {
        self.insert(parent, label, "div")
    }

    pub(crate) fn button(&self, parent: FakeNode, label: &str) -> FakeNode {
        self.insert(parent, label, "button")
    }

    pub(crate) fn link(&self, parent: FakeNode, label: &str) -> FakeNode {
        let node = self.insert(parent, label, "a");
        self.inner.borrow_mut().nodes[node.0].has_href = true;
        node
    }

    pub(crate) fn set_disabled(&self, node: FakeNode, disabled: bool) {
        self.inner.borrow_mut().nodes[node.0].disabled = disabled;
    }

    pub(crate) fn set_tab_index(&self, node: FakeNode, tab_index: &'static str) {
        self.inner.borrow_mut().nodes[node.0].tab_index = Some(tab_index);
    }

    pub(crate) fn detach(&self, node: FakeNode) {
        let mut inner = self.inner.borrow_mut();
        inner.nodes[node.0].detached = true;
        if let Some(parent) = inner.nodes[node.0].parent {
            inner.nodes[parent].children.retain(|child| *child != node.0);
        }
        if inner.active == Some(node.0) {
            inner.active = Some(0);
        }
    }

    /// Focuses a node directly, as a pointer click would.
    pub(crate) fn click(&self, node: FakeNode) {
        self.inner.borrow_mut().active = Some(node.0);
    }

    pub(crate) fn active_label(&self) -> String {
        let inner = self.inner.borrow();
        inner
            .active
            .map(|id| inner.nodes[id].label.clone())
            .unwrap_or_default()
    }

    pub(crate) fn record(&self, entry: impl Into<String>) {
        self.inner.borrow_mut().journal.push(entry.into());
    }

    pub(crate) fn journal(&self) -> Vec<String> {
        self.inner.borrow().journal.clone()
    }

    fn attached(inner: &Inner, id: usize) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &inner.nodes[current];
            if node.detached {
                return false;
            }
            cursor = node.parent;
        }
        true
    }

    fn collect(inner: &Inner, id: usize, out: &mut Vec<FakeNode>) {
        for child in &inner.nodes[id].children {
            let node = &inner.nodes[*child];
            let candidate = FocusCandidate {
                tag_name: node.tag,
                has_href: node.has_href,
                disabled: node.disabled,
                tab_index: node.tab_index,
                ..FocusCandidate::default()
            };
            if is_focusable(&candidate) {
                out.push(FakeNode(*child));
            }
            Self::collect(inner, *child, out);
        }
    }
}

impl FocusHost for FakeDocument {
    type Element = FakeNode;

    fn active_element(&self) -> Option<FakeNode> {
        self.inner.borrow().active.map(FakeNode)
    }

    fn focusable_within(&self, root: &FakeNode) -> Vec<FakeNode> {
        let inner = self.inner.borrow();
        let mut out = Vec::new();
        Self::collect(&inner, root.0, &mut out);
        out
    }

    fn focus(&self, element: &FakeNode) {
        let mut inner = self.inner.borrow_mut();
        if !Self::attached(&inner, element.0) {
            return;
        }
        inner.active = Some(element.0);
        let entry = format!("focus:{}", inner.nodes[element.0].label);
        inner.journal.push(entry);
    }

    fn is_attached(&self, element: &FakeNode) -> bool {
        Self::attached(&self.inner.borrow(), element.0)
    }

    fn contains(&self, root: &FakeNode, element: &FakeNode) -> bool {
        let inner = self.inner.borrow();
        let mut cursor = Some(element.0);
        while let Some(current) = cursor {
            if current == root.0 {
                return true;
            }
            cursor = inner.nodes[current].parent;
        }
        false
    }
}

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Write as _;

use sticky::{CssValue, EventKind, EventTarget, Host, ListenerId, Rect, StyleProperty, Viewport};

use crate::html;

/// Identity of a node in a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) tag: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) classes: Vec<String>,
    pub(crate) styles: BTreeMap<StyleProperty, CssValue>,
    pub(crate) rect: Rect,
}

impl Node {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            parent,
            children: Vec::new(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            styles: BTreeMap::new(),
            rect: Rect::default(),
        }
    }
}

#[derive(Clone, Debug)]
struct Listener {
    id: ListenerId,
    target: EventTarget<NodeId>,
    kind: EventKind,
}

/// A framework-neutral, in-memory document implementing [`Host`].
///
/// There is no layout engine: geometry is whatever the caller sets with [`Document::set_rect`].
/// This is enough to simulate scrolling pages, and to test sticky behavior without a browser.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Node>,
    body: NodeId,
    viewport: Viewport,
    scroll_top: i32,
    ready: bool,
    listeners: Vec<Listener>,
    next_listener: u64,
}

impl Document {
    /// Creates a loading (not ready) document with an empty `<body>`.
    pub fn new(viewport: Viewport) -> Self {
        let mut body = Node::new("body", None);
        body.rect = Rect::new(0, 0, viewport.width, 0);
        Self {
            nodes: vec![body],
            body: NodeId(0),
            viewport,
            scroll_top: 0,
            ready: false,
            listeners: Vec::new(),
            next_listener: 1,
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Appends a new `<tag>` element to `parent`.
    pub fn create_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        debug_assert!(self.node(parent).is_some(), "unknown parent node");
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(tag, Some(parent)));
        if let Some(p) = self.node_mut(parent) {
            p.children.push(id);
        }
        id
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_scroll_top(&mut self, scroll_top: i32) {
        self.scroll_top = scroll_top;
    }

    pub fn set_rect(&mut self, id: NodeId, rect: Rect) {
        if let Some(node) = self.node_mut(id) {
            node.rect = rect;
        }
    }

    pub fn rect(&self, id: NodeId) -> Rect {
        self.node(id).map(|n| n.rect).unwrap_or_default()
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.tag.as_str())
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Sets an attribute; `class` replaces the class list.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        if name == "class" {
            node.classes = value.split_whitespace().map(ToString::to_string).collect();
        } else {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        if let Some(node) = self.node_mut(id) {
            node.attributes.remove(name);
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        self.node(id).map(|n| n.classes.as_slice()).unwrap_or(&[])
    }

    pub fn style(&self, id: NodeId, property: StyleProperty) -> Option<CssValue> {
        self.node(id)?.styles.get(&property).copied()
    }

    /// Renders the inline style attribute (`"position: fixed; top: 0px;"`).
    pub fn style_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(node) = self.node(id) {
            for (property, value) in &node.styles {
                if !out.is_empty() {
                    out.push(' ');
                }
                let _ = write!(out, "{property}: {value};");
            }
        }
        out
    }

    /// Listener handles subscribed to `kind` on `target`, in subscription order.
    pub fn listeners_for(&self, target: &EventTarget<NodeId>, kind: EventKind) -> Vec<ListenerId> {
        self.listeners
            .iter()
            .filter(|l| l.kind == kind && &l.target == target)
            .map(|l| l.id)
            .collect()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Host for Document {
    type Element = NodeId;

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        html::select(self, selector)
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn parent(&self, el: &NodeId) -> Option<NodeId> {
        self.node(*el)?.parent
    }

    fn has_attribute(&self, el: &NodeId, name: &str) -> bool {
        self.node(*el).is_some_and(|n| n.attributes.contains_key(name))
    }

    fn attribute(&self, el: &NodeId, name: &str) -> Option<String> {
        let node = self.node(*el)?;
        if name == "class" {
            return Some(node.classes.join(" "));
        }
        node.attributes.get(name).cloned()
    }

    fn is_image(&self, el: &NodeId) -> bool {
        self.tag(*el) == Some("img")
    }

    fn offset_rect(&self, el: &NodeId) -> Rect {
        self.rect(*el)
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_top(&self) -> i32 {
        self.scroll_top
    }

    fn set_style(&mut self, el: &NodeId, property: StyleProperty, value: Option<CssValue>) {
        let Some(node) = self.node_mut(*el) else {
            return;
        };
        match value {
            Some(value) => {
                node.styles.insert(property, value);
            }
            None => {
                node.styles.remove(&property);
            }
        }
    }

    fn add_class(&mut self, el: &NodeId, class: &str) {
        if self.has_class(*el, class) {
            return;
        }
        if let Some(node) = self.node_mut(*el) {
            node.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, el: &NodeId, class: &str) {
        if let Some(node) = self.node_mut(*el) {
            node.classes.retain(|c| c != class);
        }
    }

    /// Turns the first element of `markup` (`<span class="a" data-x="1"></span>`) into a new
    /// node, inserts it where `el` was and moves `el` inside. The wrapper starts with `el`'s
    /// geometry.
    fn wrap(&mut self, el: &NodeId, markup: &str) -> Option<NodeId> {
        let Some((tag, attributes)) = html::parse_wrapper(markup) else {
            sdebug!(markup, "wrapper markup has no element");
            return None;
        };
        let parent = self.parent(el)?;
        let rect = self.rect(*el);

        let wrapper = NodeId(self.nodes.len() as u32);
        let mut node = Node::new(&tag, Some(parent));
        node.rect = rect;
        node.children.push(*el);
        self.nodes.push(node);
        for (name, value) in &attributes {
            self.set_attribute(wrapper, name, value);
        }

        let siblings = &mut self.node_mut(parent)?.children;
        match siblings.iter().position(|c| c == el) {
            Some(pos) => siblings[pos] = wrapper,
            None => siblings.push(wrapper),
        }
        if let Some(node) = self.node_mut(*el) {
            node.parent = Some(wrapper);
        }
        Some(wrapper)
    }

    fn listen(&mut self, target: EventTarget<NodeId>, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(Listener { id, target, kind });
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.listeners.retain(|l| l.id != id);
    }
}

//! In-memory element tree.
//!
//! A [`Node`] plays the part of a native SVG DOM element: it owns a tag name,
//! attributes, inline style declarations, text, children and event listeners.
//! Wrappers such as [`Rectangle`](crate::shapes::Rectangle) hold a `Node` handle
//! and proxy their getters and setters to it, so several wrappers (or a wrapper and
//! its parent group) can observe the same element.
//!
//! Handles are reference counted and single-threaded. Cloning a `Node` clones the
//! handle, not the element; use [`Node::deep_clone`] for a copy.

use crate::error::{SvgError, SvgResult};
use crate::events::{Event, EventType, ListenerId, ListenerOptions};
use crate::ids;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// XML namespace of SVG elements.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

type Callback = Rc<dyn Fn(&Event)>;

struct Listener {
    id: ListenerId,
    event_type: EventType,
    callback: Callback,
    once: bool,
}

#[derive(Default)]
struct NodeData {
    tag: String,
    attributes: Vec<(String, String)>,
    style: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Node>,
    parent: Weak<RefCell<NodeData>>,
    listeners: Vec<Listener>,
    next_listener: u64,
}

/// Shared handle to an element in the tree.
#[derive(Clone)]
pub struct Node(Rc<RefCell<NodeData>>);

impl Node {
    /// Create an element, assigning an `id` and, if enabled, a `tabindex`.
    pub fn create(tag: &str) -> Self {
        let node = Self::detached(tag);
        node.assign_automatic_attributes();
        node
    }

    /// Create an element without any automatic attributes.
    pub fn detached(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            tag: tag.to_string(),
            ..NodeData::default()
        })))
    }

    fn assign_automatic_attributes(&self) {
        if !self.has_attribute("id") {
            let id = ids::next_id(&self.tag());
            self.set_attribute("id", id);
        }
        if !self.has_attribute("tabindex") {
            if let Some(index) = ids::next_tab_index() {
                self.set_attribute("tabindex", index);
            }
        }
    }

    /// Tag name of the element.
    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    /// Check if two handles refer to the same element.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    // Attributes

    /// Read an attribute. `style` is answered from the inline style map.
    pub fn attribute(&self, name: &str) -> Option<String> {
        let data = self.0.borrow();
        if name == "style" {
            if data.style.is_empty() {
                return None;
            }
            return Some(serialize_declarations(&data.style));
        }
        data.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    /// Read an attribute as a number.
    pub fn attribute_f64(&self, name: &str) -> Option<f64> {
        let value = self.attribute(name)?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<f64>() {
            Ok(number) => Some(number),
            Err(_) => {
                log::warn!("Attribute {}={:?} on <{}> is not a number", name, value, self.tag());
                None
            }
        }
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        if name == "style" {
            return !self.0.borrow().style.is_empty();
        }
        self.0.borrow().attributes.iter().any(|(key, _)| key == name)
    }

    /// Set an attribute, keeping its original position when it already exists.
    /// Setting `style` replaces the inline style map with the parsed declarations.
    pub fn set_attribute(&self, name: &str, value: impl ToString) {
        let value = value.to_string();
        let mut data = self.0.borrow_mut();
        if name == "style" {
            data.style = parse_declarations(&value);
            return;
        }
        upsert(&mut data.attributes, name, value);
    }

    pub fn remove_attribute(&self, name: &str) -> Option<String> {
        let mut data = self.0.borrow_mut();
        if name == "style" {
            let removed = (!data.style.is_empty()).then(|| serialize_declarations(&data.style));
            data.style.clear();
            return removed;
        }
        let index = data.attributes.iter().position(|(key, _)| key == name)?;
        Some(data.attributes.remove(index).1)
    }

    /// All attributes in insertion order, excluding the inline style.
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.0.borrow().attributes.clone()
    }

    // Inline style

    pub fn style_property(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .style
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    pub fn set_style_property(&self, name: &str, value: impl ToString) {
        upsert(&mut self.0.borrow_mut().style, name, value.to_string());
    }

    pub fn remove_style_property(&self, name: &str) -> Option<String> {
        let mut data = self.0.borrow_mut();
        let index = data.style.iter().position(|(key, _)| key == name)?;
        Some(data.style.remove(index).1)
    }

    pub fn style_properties(&self) -> Vec<(String, String)> {
        self.0.borrow().style.clone()
    }

    // Text

    /// Text placed directly in this element, before its children.
    pub fn own_text(&self) -> Option<String> {
        self.0.borrow().text.clone()
    }

    /// Concatenated text of this element and all its descendants.
    pub fn text_content(&self) -> String {
        let mut content = self.own_text().unwrap_or_default();
        for child in self.children() {
            content.push_str(&child.text_content());
        }
        content
    }

    /// Replace all children with a single run of text.
    pub fn set_text_content(&self, text: &str) {
        for child in self.children() {
            self.remove_child(&child);
        }
        self.0.borrow_mut().text = Some(text.to_string());
    }

    // Tree

    /// Append a child, detaching it from any previous parent first.
    pub fn append_child(&self, child: &Node) {
        if child.contains(self) {
            log::warn!(
                "Refusing to nest <{}> inside its own descendant <{}>",
                child.tag(),
                self.tag()
            );
            return;
        }
        child.detach();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
        log::debug!("Nested <{}> into <{}>", child.tag(), self.tag());
    }

    /// Remove a direct child. Returns false if `child` is not a child of this node.
    pub fn remove_child(&self, child: &Node) -> bool {
        let removed = {
            let mut data = self.0.borrow_mut();
            match data.children.iter().position(|c| c.ptr_eq(child)) {
                Some(index) => {
                    data.children.remove(index);
                    true
                }
                None => false,
            }
        };
        if removed {
            child.0.borrow_mut().parent = Weak::new();
        }
        removed
    }

    /// Remove this node from its parent, if any.
    pub fn detach(&self) {
        if let Some(parent) = self.parent() {
            parent.remove_child(self);
        }
    }

    pub fn children(&self) -> Vec<Node> {
        self.0.borrow().children.clone()
    }

    pub fn parent(&self) -> Option<Node> {
        self.0.borrow().parent.upgrade().map(Node)
    }

    /// Parent, grandparent and so on up to the root.
    pub fn ancestors(&self) -> Vec<Node> {
        let mut ancestors = Vec::new();
        let mut current = self.parent();
        while let Some(node) = current {
            current = node.parent();
            ancestors.push(node);
        }
        ancestors
    }

    /// Check if `other` is this node or one of its descendants.
    pub fn contains(&self, other: &Node) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        other.ancestors().iter().any(|ancestor| ancestor.ptr_eq(self))
    }

    // Events

    /// Register a listener and return its handle.
    pub fn add_listener(
        &self,
        event_type: EventType,
        options: ListenerOptions,
        callback: impl Fn(&Event) + 'static,
    ) -> ListenerId {
        let mut data = self.0.borrow_mut();
        let id = ListenerId(data.next_listener);
        data.next_listener += 1;
        data.listeners.push(Listener {
            id,
            event_type,
            callback: Rc::new(callback),
            once: options.once,
        });
        id
    }

    /// Remove a listener. Returns false if it was not registered for `event_type`.
    pub fn remove_listener(&self, event_type: &EventType, id: ListenerId) -> bool {
        let mut data = self.0.borrow_mut();
        let before = data.listeners.len();
        data.listeners
            .retain(|listener| !(listener.id == id && &listener.event_type == event_type));
        data.listeners.len() != before
    }

    pub fn listener_count(&self, event_type: &EventType) -> usize {
        self.0
            .borrow()
            .listeners
            .iter()
            .filter(|listener| &listener.event_type == event_type)
            .count()
    }

    /// Deliver an event to this node, then to its ancestors if the event bubbles.
    /// Returns the number of listeners invoked.
    pub fn dispatch_event(&self, event: &Event) -> usize {
        let mut path = vec![self.clone()];
        if event.bubbles {
            path.extend(self.ancestors());
        }

        let mut invoked = 0;
        for node in path {
            // Collect first so listeners are free to mutate the tree.
            let callbacks: Vec<Callback> = {
                let mut data = node.0.borrow_mut();
                let callbacks = data
                    .listeners
                    .iter()
                    .filter(|listener| listener.event_type == event.event_type)
                    .map(|listener| listener.callback.clone())
                    .collect();
                data.listeners
                    .retain(|listener| !(listener.once && listener.event_type == event.event_type));
                callbacks
            };
            for callback in callbacks {
                callback(event);
                invoked += 1;
            }
        }
        invoked
    }

    // Copies

    /// Plain-data copy of this subtree. Listeners are not captured.
    pub fn snapshot(&self) -> NodeSnapshot {
        let data = self.0.borrow();
        NodeSnapshot {
            tag: data.tag.clone(),
            attributes: data.attributes.clone(),
            style: data.style.clone(),
            text: data.text.clone(),
            children: data.children.iter().map(Node::snapshot).collect(),
        }
    }

    /// Rebuild a subtree exactly as captured, including IDs.
    pub fn from_snapshot(snapshot: &NodeSnapshot) -> Self {
        Self::instantiate(snapshot, false)
    }

    /// Detached copy of this subtree where every element gets a fresh ID and tab index.
    pub fn deep_clone(&self) -> Self {
        Self::instantiate(&self.snapshot(), true)
    }

    fn instantiate(snapshot: &NodeSnapshot, fresh_ids: bool) -> Self {
        let node = Self::detached(&snapshot.tag);
        {
            let mut data = node.0.borrow_mut();
            data.attributes = snapshot
                .attributes
                .iter()
                .filter(|(key, _)| !fresh_ids || (key != "id" && key != "tabindex"))
                .cloned()
                .collect();
            data.style = snapshot.style.clone();
            data.text = snapshot.text.clone();
        }
        if fresh_ids {
            node.assign_automatic_attributes();
        }
        for child in &snapshot.children {
            node.append_child(&Self::instantiate(child, fresh_ids));
        }
        node
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        let id = data
            .attributes
            .iter()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.as_str());
        f.debug_struct("Node")
            .field("tag", &data.tag)
            .field("id", &id)
            .field("children", &data.children.len())
            .finish()
    }
}

/// Serializable copy of an element subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub tag: String,
    #[serde(default)]
    pub attributes: Vec<(String, String)>,
    #[serde(default)]
    pub style: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    pub fn to_json(&self) -> SvgResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SvgError::Snapshot(e.to_string()))
    }

    pub fn from_json(json: &str) -> SvgResult<Self> {
        serde_json::from_str(json).map_err(|e| SvgError::Snapshot(e.to_string()))
    }
}

fn upsert(entries: &mut Vec<(String, String)>, name: &str, value: String) {
    match entries.iter_mut().find(|(key, _)| key == name) {
        Some(entry) => entry.1 = value,
        None => entries.push((name.to_string(), value)),
    }
}

/// Parse `prop: value; prop: value` declarations.
fn parse_declarations(text: &str) -> Vec<(String, String)> {
    let mut declarations = Vec::new();
    for declaration in text.split(';') {
        if let Some((name, value)) = declaration.split_once(':') {
            let name = name.trim();
            if !name.is_empty() {
                upsert(&mut declarations, name, value.trim().to_string());
            }
        }
    }
    declarations
}

fn serialize_declarations(declarations: &[(String, String)]) -> String {
    declarations
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_create_assigns_id_and_tabindex() {
        ids::reset();
        let rect = Node::create("rect");
        let circle = Node::create("circle");
        let rect2 = Node::create("rect");

        assert_eq!(rect.attribute("id").as_deref(), Some("rect-0"));
        assert_eq!(circle.attribute("id").as_deref(), Some("circle-0"));
        assert_eq!(rect2.attribute("id").as_deref(), Some("rect-1"));
        assert_eq!(rect.attribute("tabindex").as_deref(), Some("0"));
        assert_eq!(rect2.attribute("tabindex").as_deref(), Some("2"));
    }

    #[test]
    fn test_detached_has_no_attributes() {
        let node = Node::detached("g");
        assert!(node.attributes().is_empty());
    }

    #[test]
    fn test_attribute_round_trip_keeps_order() {
        let node = Node::detached("rect");
        node.set_attribute("x", 10);
        node.set_attribute("y", 2.5);
        node.set_attribute("x", 12);

        assert_eq!(node.attribute_f64("x"), Some(12.0));
        assert_eq!(node.attribute_f64("y"), Some(2.5));
        assert_eq!(node.attributes()[0].0, "x");
        assert_eq!(node.remove_attribute("x").as_deref(), Some("12"));
        assert!(!node.has_attribute("x"));
        assert_eq!(node.attribute_f64("missing"), None);
    }

    #[test]
    fn test_non_numeric_attribute() {
        let node = Node::detached("rect");
        node.set_attribute("width", "auto");
        assert_eq!(node.attribute_f64("width"), None);
    }

    #[test]
    fn test_style_attribute_is_inline_style() {
        let node = Node::detached("rect");
        node.set_attribute("style", "fill: red; stroke-width:2;");
        assert_eq!(node.style_property("fill").as_deref(), Some("red"));
        assert_eq!(node.style_property("stroke-width").as_deref(), Some("2"));

        node.set_style_property("fill", "blue");
        assert_eq!(
            node.attribute("style").as_deref(),
            Some("fill: blue; stroke-width: 2")
        );
        assert!(node.attributes().is_empty());
    }

    #[test]
    fn test_append_child_reparents() {
        let a = Node::detached("g");
        let b = Node::detached("g");
        let child = Node::detached("rect");

        a.append_child(&child);
        assert!(a.contains(&child));
        assert_eq!(child.parent(), Some(a.clone()));

        b.append_child(&child);
        assert!(!a.contains(&child));
        assert!(b.contains(&child));
        assert!(a.children().is_empty());
    }

    #[test]
    fn test_append_ancestor_is_refused() {
        let outer = Node::detached("g");
        let inner = Node::detached("g");
        outer.append_child(&inner);
        inner.append_child(&outer);
        assert!(outer.contains(&inner));
        assert!(inner.children().is_empty());
    }

    #[test]
    fn test_text_content() {
        let text = Node::detached("text");
        text.set_text_content("Hello ");
        let span = Node::detached("tspan");
        span.set_text_content("world");
        text.append_child(&span);

        assert_eq!(text.text_content(), "Hello world");
        text.set_text_content("Bye");
        assert_eq!(text.text_content(), "Bye");
        assert!(span.parent().is_none());
    }

    #[test]
    fn test_dispatch_bubbles_and_once() {
        let group = Node::detached("g");
        let rect = Node::detached("rect");
        group.append_child(&rect);

        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        group.add_listener(EventType::Click, ListenerOptions::default(), move |_| {
            counter.set(counter.get() + 1)
        });
        let counter = hits.clone();
        rect.add_listener(EventType::Click, ListenerOptions { once: true }, move |_| {
            counter.set(counter.get() + 10)
        });

        assert_eq!(rect.dispatch_event(&Event::new(EventType::Click)), 2);
        assert_eq!(hits.get(), 11);
        assert_eq!(rect.dispatch_event(&Event::new(EventType::Click)), 1);
        assert_eq!(hits.get(), 12);
    }

    #[test]
    fn test_listener_may_mutate_node() {
        let rect = Node::detached("rect");
        let target = rect.clone();
        rect.add_listener(EventType::Click, ListenerOptions::default(), move |_| {
            target.set_attribute("fill", "red")
        });
        rect.dispatch_event(&Event::new(EventType::Click));
        assert_eq!(rect.attribute("fill").as_deref(), Some("red"));
    }

    #[test]
    fn test_remove_listener() {
        let rect = Node::detached("rect");
        let id = rect.add_listener(EventType::KeyDown, ListenerOptions::default(), |_| {});
        assert!(!rect.remove_listener(&EventType::KeyUp, id));
        assert!(rect.remove_listener(&EventType::KeyDown, id));
        assert_eq!(rect.listener_count(&EventType::KeyDown), 0);
    }

    #[test]
    fn test_deep_clone_gets_fresh_ids() {
        ids::reset();
        let group = Node::create("g");
        let rect = Node::create("rect");
        rect.set_attribute("width", 5);
        group.append_child(&rect);

        let copy = group.deep_clone();
        assert!(!copy.ptr_eq(&group));
        assert_eq!(copy.attribute("id").as_deref(), Some("g-1"));
        let copied_rect = &copy.children()[0];
        assert_eq!(copied_rect.attribute("id").as_deref(), Some("rect-1"));
        assert_eq!(copied_rect.attribute_f64("width"), Some(5.0));
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let group = Node::detached("g");
        let rect = Node::detached("rect");
        rect.set_attribute("x", 1);
        rect.set_style_property("fill", "red");
        group.append_child(&rect);

        let json = group.snapshot().to_json().unwrap();
        let restored = Node::from_snapshot(&NodeSnapshot::from_json(&json).unwrap());
        assert_eq!(restored.snapshot(), group.snapshot());
        assert!(NodeSnapshot::from_json("{").is_err());
    }
}

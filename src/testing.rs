//! In-memory collaborators for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::clock::Clock;
use crate::error::StatsError;
use crate::page::Page;
use crate::stats::api::JsonFetch;
use crate::storage::PreferenceStore;

// =============================================================================
// Page
// =============================================================================

pub type NodeId = usize;

#[derive(Clone, Debug, Default)]
pub struct Node {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub text: Option<String>,
    pub parent: Option<NodeId>,
    pub offset_height: f64,
    pub viewport_top: f64,
}

impl Node {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.offset_height = height;
        self
    }

    pub fn at_viewport_top(mut self, top: f64) -> Self {
        self.viewport_top = top;
        self
    }

    /// Supports `#id`, `.class`, `tag` and `tag[attr^="prefix"]`.
    fn matches(&self, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            return self.id.as_deref() == Some(id);
        }
        if let Some(class) = selector.strip_prefix('.') {
            return self.classes.iter().any(|c| c == class);
        }
        if let Some((tag, rest)) = selector.split_once('[') {
            let Some((attr, prefix)) = rest.trim_end_matches(']').split_once("^=") else {
                return false;
            };
            let prefix = prefix.trim_matches('"');
            return self.tag == tag
                && self
                    .attributes
                    .get(attr)
                    .is_some_and(|value| value.starts_with(prefix));
        }
        self.tag == selector
    }
}

/// A flat in-memory document. Node 0 is the `<html>` root.
pub struct FakePage {
    nodes: RefCell<Vec<Node>>,
    scroll_y: Cell<f64>,
    prefers_dark: Cell<bool>,
    pub scrolls: RefCell<Vec<f64>>,
    pub history: RefCell<Vec<String>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(vec![Node::new("html")]),
            scroll_y: Cell::new(0.0),
            prefers_dark: Cell::new(false),
            scrolls: RefCell::new(Vec::new()),
            history: RefCell::new(Vec::new()),
        }
    }

    pub fn add(&self, node: Node) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        nodes.len() - 1
    }

    pub fn set_prefers_dark(&self, dark: bool) {
        self.prefers_dark.set(dark);
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn set_height(&self, id: NodeId, height: f64) {
        self.nodes.borrow_mut()[id].offset_height = height;
    }

    /// Nearest ancestor-or-self with the given tag, like `Element.closest`.
    pub fn closest(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        let mut current = Some(id);
        while let Some(node_id) = current {
            if nodes[node_id].tag == tag {
                return Some(node_id);
            }
            current = nodes[node_id].parent;
        }
        None
    }
}

impl Page for FakePage {
    type Element = NodeId;

    fn root(&self) -> Option<NodeId> {
        Some(0)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .position(|node| node.id.as_deref() == Some(id))
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .position(|node| node.matches(selector))
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.matches(selector))
            .map(|(id, _)| id)
            .collect()
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[*element].attributes.get(name).cloned()
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[*element]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn toggle_class(&self, element: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[*element].classes;
        if let Some(pos) = classes.iter().position(|c| c == class) {
            classes.remove(pos);
        } else {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        self.nodes.borrow_mut()[*element]
            .classes
            .retain(|c| c != class);
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[*element]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn text(&self, element: &NodeId) -> Option<String> {
        self.nodes.borrow()[*element].text.clone()
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        self.nodes.borrow_mut()[*element].text = Some(text.to_string());
    }

    fn offset_height(&self, element: &NodeId) -> f64 {
        self.nodes.borrow()[*element].offset_height
    }

    fn viewport_top(&self, element: &NodeId) -> f64 {
        self.nodes.borrow()[*element].viewport_top
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
    }

    fn push_history(&self, url: &str) {
        self.history.borrow_mut().push(url.to_string());
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }
}

// =============================================================================
// Storage
// =============================================================================

/// Map-backed store; `failing()` behaves like disabled browser storage.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        if self.failing {
            return None;
        }
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> bool {
        if self.failing {
            return false;
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }
}

impl PreferenceStore for &MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> bool {
        (**self).write(key, value)
    }
}

// =============================================================================
// Clock
// =============================================================================

/// Fixed year; dates formatted as ISO `YYYY-MM-DD` in UTC.
#[derive(Clone, Copy)]
pub struct FixedClock {
    pub year: i32,
}

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.year
    }

    fn local_date(&self, epoch_seconds: i64) -> String {
        DateTime::<Utc>::from_timestamp(epoch_seconds, 0)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

// =============================================================================
// HTTP
// =============================================================================

#[derive(Clone)]
pub enum FakeResponse {
    Json(serde_json::Value),
    Status(u16),
    Transport,
}

/// URL-keyed canned responses. Unknown URLs fail as transport errors.
#[derive(Default)]
pub struct FakeFetch {
    responses: RefCell<HashMap<String, FakeResponse>>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeFetch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: &str, response: FakeResponse) -> Self {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), response);
        self
    }
}

#[async_trait(?Send)]
impl JsonFetch for FakeFetch {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, StatsError> {
        self.requests.borrow_mut().push(url.to_string());
        let response = self.responses.borrow().get(url).cloned();
        match response {
            Some(FakeResponse::Json(value)) => {
                serde_json::from_value(value).map_err(|e| StatsError::Decode(e.to_string()))
            }
            Some(FakeResponse::Status(code)) => Err(StatsError::Status(code)),
            Some(FakeResponse::Transport) | None => {
                Err(StatsError::Transport(format!("no route to {url}")))
            }
        }
    }
}

#[async_trait(?Send)]
impl JsonFetch for &FakeFetch {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, StatsError> {
        (**self).get_json(url).await
    }
}

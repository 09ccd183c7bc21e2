//! # Elements
//!
//! A node of the retained element tree: what kind of control it is, the role
//! it plays on the page, its visible state and its bound listeners.

use super::events::{EventKind, Listener};
use std::collections::BTreeMap;

/// Attribute holding an item's position at last render
pub const ATTR_INDEX: &str = "index";

/// Attribute holding an item's stable id
pub const ATTR_ITEM_ID: &str = "item-id";

/// Handle to an element inside a [`Document`](super::Document).
///
/// Slots are recycled; the generation tells a live handle from a stale one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId {
    slot: usize,
    generation: u32,
}

impl ElementId {
    pub(crate) fn new(slot: usize) -> Self {
        Self::with_generation(slot, 0)
    }

    pub(crate) fn with_generation(slot: usize, generation: u32) -> Self {
        Self { slot, generation }
    }

    pub(crate) fn slot(self) -> usize {
        self.slot
    }

    pub(crate) fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Container,
    TextInput,
    Checkbox,
    Label,
    Button,
}

impl ElementKind {
    /// Whether the element can take keyboard focus
    pub fn is_interactive(self) -> bool {
        !matches!(self, ElementKind::Container)
    }
}

/// Part an element plays on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Root,
    NewItemInput,
    CreateButton,
    ToggleAll,
    DeleteAll,
    TodoList,
    Item,
    ItemToggle,
    ItemInput,
    ItemLabel,
    ItemDelete,
}

#[derive(Debug, Clone)]
pub struct Element {
    kind: ElementKind,
    role: Role,
    text: String,
    checked: bool,
    struck: bool,
    hidden: bool,
    attributes: BTreeMap<String, String>,
    listeners: Vec<(EventKind, Listener)>,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
}

impl Element {
    pub fn new(kind: ElementKind, role: Role) -> Self {
        Self {
            kind,
            role,
            text: String::new(),
            checked: false,
            struck: false,
            hidden: false,
            attributes: BTreeMap::new(),
            listeners: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_struck(mut self, struck: bool) -> Self {
        self.struck = struck;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    pub fn with_listener(mut self, kind: EventKind, listener: Listener) -> Self {
        self.listeners.push((kind, listener));
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Input value, label text or button caption depending on kind
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn is_struck(&self) -> bool {
        self.struck
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    /// Listeners bound for one event kind, in binding order
    pub fn listeners_for(&self, kind: EventKind) -> impl Iterator<Item = Listener> + '_ {
        self.listeners
            .iter()
            .filter(move |(bound, _)| *bound == kind)
            .map(|(_, listener)| *listener)
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

//! # Todo Item
//!
//! A single record in the todo list plus the stable identifier it carries
//! for its whole lifetime.

use std::fmt;

/// Stable opaque identifier assigned to an item when it is created.
///
/// Identifiers are never reused within one model, so an event that names a
/// deleted item resolves to nothing instead of to whichever item slid into
/// its old position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Parse an id back from its attribute form
    pub fn parse(text: &str) -> Option<Self> {
        text.parse().ok().map(Self)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A todo entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    id: ItemId,
    name: String,
    done: bool,
}

impl TodoItem {
    pub(crate) fn new(id: ItemId, name: String, done: bool) -> Self {
        Self { id, name, done }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub(crate) fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    pub(crate) fn toggle(&mut self) {
        self.done = !self.done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_should_round_trip_through_attribute_text() {
        let id = ItemId::new(42);
        assert_eq!(ItemId::parse(&id.to_string()), Some(id));
    }

    #[test]
    fn item_id_parse_should_reject_garbage() {
        assert_eq!(ItemId::parse("not-a-number"), None);
        assert_eq!(ItemId::parse(""), None);
    }

    #[test]
    fn toggle_should_flip_done_flag() {
        let mut item = TodoItem::new(ItemId::new(0), "write tests".to_string(), false);

        item.toggle();
        assert!(item.is_done());

        item.toggle();
        assert!(!item.is_done());
    }
}

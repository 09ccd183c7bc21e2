//! # Todo Model
//!
//! Sole owner of the todo list. Every read and write of list state goes
//! through this type; operations address items by their current position.

use super::seed::SeedItem;
use super::todo_item::{ItemId, TodoItem};
use anyhow::{bail, Result};

/// Totals reported by [`TodoModel::count_items`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemCounts {
    pub num_items: usize,
    pub num_done_items: usize,
}

/// Ordered list of todo items
#[derive(Debug, Clone, Default)]
pub struct TodoModel {
    items: Vec<TodoItem>,
    next_id: u64,
}

impl TodoModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from a parsed seed payload, preserving its order
    pub fn from_seed(seed: Vec<SeedItem>) -> Self {
        let mut model = Self::new();
        for record in seed {
            let id = model.allocate_id();
            model
                .items
                .push(TodoItem::new(id, record.name, record.done));
        }
        model
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            bail!(
                "Item index {} out of bounds (list has {} items)",
                index,
                self.items.len()
            );
        }
        Ok(())
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current position of the item with the given id, if it still exists
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn count_items(&self) -> ItemCounts {
        ItemCounts {
            num_items: self.items.len(),
            num_done_items: self.items.iter().filter(|item| item.is_done()).count(),
        }
    }

    /// Append a new, not-done item. The name is stored as given, empty or not.
    pub fn create_item(&mut self, name: impl Into<String>) -> ItemId {
        let id = self.allocate_id();
        self.items.push(TodoItem::new(id, name.into(), false));
        id
    }

    pub fn change_item_name(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.check_index(index)?;
        self.items[index].set_name(name.into());
        Ok(())
    }

    /// Remove the item at `index`; every later item moves down one position.
    pub fn delete_item(&mut self, index: usize) -> Result<TodoItem> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    pub fn delete_all_items(&mut self) {
        self.items.clear();
    }

    pub fn toggle_item(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.items[index].toggle();
        Ok(())
    }

    /// When every item is done, or none is, each item is flipped individually.
    /// A mixed list with at least one done item is forced to all done instead.
    pub fn toggle_all_items(&mut self) {
        let counts = self.count_items();

        if counts.num_done_items == counts.num_items || counts.num_done_items == 0 {
            for item in &mut self.items {
                item.toggle();
            }
        } else {
            for item in &mut self.items {
                item.set_done(true);
            }
        }
    }
}

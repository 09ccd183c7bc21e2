//! # Todo Controller
//!
//! Turns element events into model operations. Every handler that changes
//! the model re-renders the whole list before it returns, so the document
//! never disagrees with the model between two interactions.

use crate::todo::dom::{ConfirmDialog, Document, DomEvent, ElementId, Key, Listener, Role};
use crate::todo::models::{ItemId, TodoModel};
use crate::todo::views::TodoView;
use anyhow::{anyhow, Context, Result};

pub const DELETE_ALL_PROMPT: &str = "Delete all items?";

#[derive(Debug)]
pub struct TodoController {
    model: TodoModel,
    view: TodoView,
    document: Document,
}

impl TodoController {
    /// Mount the page for `model` and render it once
    pub fn new(model: TodoModel) -> Result<Self> {
        let mut document = Document::new();
        let view = TodoView::mount(&mut document)?;
        let mut controller = Self {
            model,
            view,
            document,
        };
        controller.refresh()?;
        Ok(controller)
    }

    pub fn model(&self) -> &TodoModel {
        &self.model
    }

    pub fn view(&self) -> &TodoView {
        &self.view
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    fn refresh(&mut self) -> Result<()> {
        self.view.display_todo_items(&self.model, &mut self.document)
    }

    /// Invoke every listener bound on the event target for this event kind
    pub fn dispatch(&mut self, event: &DomEvent, confirm: &mut dyn ConfirmDialog) -> Result<()> {
        let listeners: Vec<Listener> = match self.document.get(event.target) {
            Some(element) => element.listeners_for(event.kind).collect(),
            None => {
                tracing::debug!("Dropping {:?} for removed element", event);
                return Ok(());
            }
        };

        for listener in listeners {
            tracing::debug!("Dispatching {:?} to {:?}", event.kind, listener);
            match listener {
                Listener::CreateItem => self.create_item()?,
                Listener::CreateItemOnKeyUp => self.create_item_on_key_up(event)?,
                Listener::DisplayCreateItemButton => {
                    self.view.display_create_item_button(&mut self.document)?
                }
                Listener::ToggleItem => self.toggle_item(event)?,
                Listener::TurnOnUpdatingMode => self.turn_on_updating_mode(event)?,
                Listener::UpdateItemNameOnKeyUp => self.update_item_name_on_key_up(event)?,
                Listener::UpdateItemNameOnFocusOut => self.update_item_name_on_focus_out(event)?,
                Listener::DeleteItem(id) => {
                    let index = self.index_of(id)?;
                    self.delete_item(index)?
                }
                Listener::ToggleAllItems => self.toggle_all_items()?,
                Listener::DeleteAllItems => self.delete_all_items(confirm)?,
            }
        }
        Ok(())
    }

    fn index_of(&self, id: ItemId) -> Result<usize> {
        self.model
            .position_of(id)
            .ok_or_else(|| anyhow!("Item {} no longer exists", id))
    }

    /// Resolve the model index of the item an event target belongs to.
    ///
    /// The rendered `index` attribute may be stale; the item id is not.
    fn resolve_index(&self, target: ElementId) -> Result<usize> {
        let id = self
            .document
            .item_id_of(target)
            .ok_or_else(|| anyhow!("Element {:?} is not inside a rendered item", target))?;
        self.index_of(id)
    }

    /// Sibling of `target` inside the same item container
    fn item_part(&self, target: ElementId, role: Role) -> Result<ElementId> {
        let container = self
            .document
            .closest(target, Role::Item)
            .ok_or_else(|| anyhow!("Element {:?} is not inside a rendered item", target))?;
        self.document
            .child_with_role(container, role)
            .ok_or_else(|| anyhow!("Item container {:?} has no {:?}", container, role))
    }

    /// Create an item from the new-item input, whatever it holds
    pub fn create_item(&mut self) -> Result<()> {
        let input = self.view.handles().new_item_input;
        let name = self.document.element(input)?.text().to_string();

        let id = self.model.create_item(name);
        tracing::info!("Created item {}", id);

        self.document.element_mut(input)?.set_text("");
        self.refresh()?;
        self.view.display_create_item_button(&mut self.document)
    }

    pub fn create_item_on_key_up(&mut self, event: &DomEvent) -> Result<()> {
        if event.key == Some(Key::Enter) {
            self.create_item()?;
        }
        Ok(())
    }

    /// ENTER commits a non-empty name; ESC discards the edit
    pub fn update_item_name_on_key_up(&mut self, event: &DomEvent) -> Result<()> {
        match event.key {
            Some(Key::Enter) => {
                let name = self.document.element(event.target)?.text().to_string();
                if !name.is_empty() {
                    let index = self.resolve_index(event.target)?;
                    self.change_item_name(index, name)?;
                }
            }
            Some(Key::Escape) => {
                let index = self.resolve_index(event.target)?;
                let current = self
                    .model
                    .item(index)
                    .with_context(|| format!("No item at index {}", index))?
                    .name()
                    .to_string();
                self.document.element_mut(event.target)?.set_text(current);
                self.refresh()?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Leaving the edit field commits a non-empty name and deletes the item otherwise
    pub fn update_item_name_on_focus_out(&mut self, event: &DomEvent) -> Result<()> {
        let name = self.document.element(event.target)?.text().to_string();
        let index = self.resolve_index(event.target)?;

        if name.is_empty() {
            tracing::debug!("Empty name on focus out, deleting item at {}", index);
            self.delete_item(index)
        } else {
            self.change_item_name(index, name)
        }
    }

    pub fn change_item_name(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.model.change_item_name(index, name)?;
        self.refresh()
    }

    pub fn delete_item(&mut self, index: usize) -> Result<()> {
        let removed = self.model.delete_item(index)?;
        tracing::info!("Deleted item {} at index {}", removed.id(), index);
        self.refresh()
    }

    pub fn toggle_item(&mut self, event: &DomEvent) -> Result<()> {
        let index = self.resolve_index(event.target)?;
        self.model.toggle_item(index)?;
        self.refresh()
    }

    pub fn toggle_all_items(&mut self) -> Result<()> {
        self.model.toggle_all_items();
        self.refresh()
    }

    /// Empty the list, but only after the user confirms
    pub fn delete_all_items(&mut self, confirm: &mut dyn ConfirmDialog) -> Result<()> {
        if !confirm.confirm(DELETE_ALL_PROMPT) {
            tracing::debug!("Delete all cancelled");
            return Ok(());
        }
        self.model.delete_all_items();
        tracing::info!("Deleted all items");
        self.refresh()
    }

    /// Swap the item's label for its edit input and focus the input
    pub fn turn_on_updating_mode(&mut self, event: &DomEvent) -> Result<()> {
        let label = self.item_part(event.target, Role::ItemLabel)?;
        let input = self.item_part(event.target, Role::ItemInput)?;

        TodoView::hide_dom_element(&mut self.document, label)?;
        TodoView::display_dom_element(&mut self.document, input)?;
        self.document.focus(input)
    }
}

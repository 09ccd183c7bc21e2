//! # Todo View
//!
//! Renders model state into the document and binds controller handlers as
//! listeners. The view reads the model but never changes it.

use crate::todo::dom::{
    Document, Element, ElementId, ElementKind, EventKind, Listener, Role, ATTR_INDEX, ATTR_ITEM_ID,
};
use crate::todo::models::{TodoItem, TodoModel};
use anyhow::Result;

/// Handles to the static page elements created by [`TodoView::mount`]
#[derive(Debug, Clone, Copy)]
pub struct PageHandles {
    pub new_item_input: ElementId,
    pub create_button: ElementId,
    pub toggle_all: ElementId,
    pub delete_all: ElementId,
    pub list: ElementId,
}

#[derive(Debug)]
pub struct TodoView {
    handles: PageHandles,
}

impl TodoView {
    /// Build the static page skeleton under the document root
    pub fn mount(document: &mut Document) -> Result<Self> {
        let root = document.root();

        let new_item_input = document.create(
            Element::new(ElementKind::TextInput, Role::NewItemInput)
                .with_listener(EventKind::Input, Listener::DisplayCreateItemButton)
                .with_listener(EventKind::KeyUp, Listener::CreateItemOnKeyUp),
        );
        let create_button = document.create(
            Element::new(ElementKind::Button, Role::CreateButton)
                .with_text("Add")
                .with_hidden(true)
                .with_listener(EventKind::Click, Listener::CreateItem),
        );
        let toggle_all = document.create(
            Element::new(ElementKind::Button, Role::ToggleAll)
                .with_text("Toggle all")
                .with_hidden(true)
                .with_listener(EventKind::Click, Listener::ToggleAllItems),
        );
        let delete_all = document.create(
            Element::new(ElementKind::Button, Role::DeleteAll)
                .with_text("Delete all")
                .with_listener(EventKind::Click, Listener::DeleteAllItems),
        );
        let list = document.create(Element::new(ElementKind::Container, Role::TodoList));

        for id in [new_item_input, create_button, toggle_all, delete_all, list] {
            document.append_child(root, id)?;
        }

        Ok(Self {
            handles: PageHandles {
                new_item_input,
                create_button,
                toggle_all,
                delete_all,
                list,
            },
        })
    }

    pub fn handles(&self) -> &PageHandles {
        &self.handles
    }

    /// Throw away the rendered list and rebuild it from the model.
    ///
    /// Items are built last to first and each is inserted at the front of
    /// the list, so the rendered order matches the model order.
    pub fn display_todo_items(&self, model: &TodoModel, document: &mut Document) -> Result<()> {
        let list = self.handles.list;
        document.remove_children(list)?;

        for (index, item) in model.items().iter().enumerate().rev() {
            let container = Self::build_item(document, index, item)?;
            document.prepend_child(list, container)?;
        }

        if model.is_empty() {
            Self::hide_dom_element(document, self.handles.toggle_all)
        } else {
            Self::display_dom_element(document, self.handles.toggle_all)
        }
    }

    fn build_item(document: &mut Document, index: usize, item: &TodoItem) -> Result<ElementId> {
        let container = document.create(
            Element::new(ElementKind::Container, Role::Item)
                .with_attribute(ATTR_INDEX, index.to_string())
                .with_attribute(ATTR_ITEM_ID, item.id().to_string()),
        );

        let toggle = document.create(
            Element::new(ElementKind::Checkbox, Role::ItemToggle)
                .with_checked(item.is_done())
                .with_listener(EventKind::Change, Listener::ToggleItem),
        );
        let input = document.create(
            Element::new(ElementKind::TextInput, Role::ItemInput)
                .with_text(item.name())
                .with_hidden(true)
                .with_listener(EventKind::KeyUp, Listener::UpdateItemNameOnKeyUp)
                .with_listener(EventKind::FocusOut, Listener::UpdateItemNameOnFocusOut),
        );
        let label = document.create(
            Element::new(ElementKind::Label, Role::ItemLabel)
                .with_text(item.name())
                .with_struck(item.is_done())
                .with_listener(EventKind::Click, Listener::TurnOnUpdatingMode),
        );
        let delete = document.create(
            Element::new(ElementKind::Button, Role::ItemDelete)
                .with_text("Delete")
                .with_listener(EventKind::Click, Listener::DeleteItem(item.id())),
        );

        for child in [toggle, input, label, delete] {
            document.append_child(container, child)?;
        }
        Ok(container)
    }

    /// Show the create button only while the new-item input holds text
    pub fn display_create_item_button(&self, document: &mut Document) -> Result<()> {
        let has_text = !document
            .element(self.handles.new_item_input)?
            .text()
            .is_empty();

        if has_text {
            Self::display_dom_element(document, self.handles.create_button)
        } else {
            Self::hide_dom_element(document, self.handles.create_button)
        }
    }

    pub fn display_dom_element(document: &mut Document, element: ElementId) -> Result<()> {
        document.element_mut(element)?.set_hidden(false);
        Ok(())
    }

    pub fn hide_dom_element(document: &mut Document, element: ElementId) -> Result<()> {
        document.element_mut(element)?.set_hidden(true);
        Ok(())
    }
}

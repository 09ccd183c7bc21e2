//! # DOM Events
//!
//! Interaction events delivered to elements and the listener bindings that
//! route them to controller handlers.

use super::element::ElementId;
use crate::todo::models::ItemId;

/// Kind of interaction an element received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    /// Checkbox state changed
    Change,
    /// Text input value changed
    Input,
    KeyUp,
    /// Focus left the element
    FocusOut,
}

/// Key carried by a key-up event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Backspace,
    Char(char),
    Other,
}

/// An interaction aimed at one element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: EventKind,
    pub target: ElementId,
    pub key: Option<Key>,
}

impl DomEvent {
    pub fn new(kind: EventKind, target: ElementId) -> Self {
        Self {
            kind,
            target,
            key: None,
        }
    }

    pub fn click(target: ElementId) -> Self {
        Self::new(EventKind::Click, target)
    }

    pub fn change(target: ElementId) -> Self {
        Self::new(EventKind::Change, target)
    }

    pub fn input(target: ElementId) -> Self {
        Self::new(EventKind::Input, target)
    }

    pub fn focus_out(target: ElementId) -> Self {
        Self::new(EventKind::FocusOut, target)
    }

    pub fn key_up(target: ElementId, key: Key) -> Self {
        Self {
            kind: EventKind::KeyUp,
            target,
            key: Some(key),
        }
    }
}

/// Controller handler bound to an element event.
///
/// `DeleteItem` captures the item it was rendered for; every other item
/// handler resolves its item from the event target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    CreateItem,
    CreateItemOnKeyUp,
    DisplayCreateItemButton,
    ToggleItem,
    TurnOnUpdatingMode,
    UpdateItemNameOnKeyUp,
    UpdateItemNameOnFocusOut,
    DeleteItem(ItemId),
    ToggleAllItems,
    DeleteAllItems,
}

//! # DOM Module
//!
//! A small retained element tree that the view renders into and the
//! controller reads interaction state from. The terminal front end paints
//! it and turns key presses into [`DomEvent`]s aimed at its elements.

pub mod confirm;
pub mod document;
pub mod element;
pub mod events;

pub use confirm::{ConfirmDialog, ScriptedConfirm};
pub use document::{Document, FocusKey};
pub use element::{Element, ElementId, ElementKind, Role, ATTR_INDEX, ATTR_ITEM_ID};
pub use events::{DomEvent, EventKind, Key, Listener};

//! # Todo Module - MVC Architecture
//!
//! - **Model**: the ordered list of items and the operations that change it
//! - **View**: renders the list into the element tree and toggles visibility
//! - **Controller**: handles element events and keeps the view in sync
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Controller    │    │      Model      │    │      View       │
//! │                 │    │                 │    │                 │
//! │ • Listeners     │────▶│ • Items        │    │ • Element tree  │
//! │ • Confirmation  │    │ • Counts        │    │ • Visibility    │
//! │ • Refresh       │────────────────────────▶│                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          ▲
//!          │ DomEvent
//!   ┌──────┴──────┐
//!   │AppController│ ◀── terminal keys, paints the document
//!   └─────────────┘
//! ```

pub mod controllers;
pub mod dom;
pub mod io;
pub mod models;
pub mod views;

pub use controllers::{AppController, TodoController};
pub use dom::{ConfirmDialog, Document, DomEvent};
pub use models::{ItemCounts, ItemId, TodoItem, TodoModel};
pub use views::TodoView;

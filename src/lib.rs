//! # Tickline - Terminal Todo List
//!
//! A todo list with a strict model/view/controller split. The view renders
//! into a small element tree, the controller reacts to events on that tree,
//! and a terminal front end paints the tree and turns key presses into
//! element events.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  DomEvent  ┌──────────────┐   mutates   ┌─────────┐
//! │  Document   │───────────▶│  Controller  │────────────▶│  Model  │
//! │             │            │              │             │         │
//! │ - Elements  │◀───────────│ - Listeners  │◀────────────│ - Items │
//! │ - Focus     │  re-render │ - Confirm    │   reads     │ - Counts│
//! └─────────────┘  via View  └──────────────┘             └─────────┘
//!        ▲                          ▲
//!        │ paints                   │ keys
//!        │                          │
//!  ┌─────┴──────────────────────────┴─┐
//!  │          AppController           │
//!  │  - Event loop   - Focus movement │
//!  └──────────────────────────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod logging;
pub mod todo;

// Re-export main types for easy access
pub use todo::*;

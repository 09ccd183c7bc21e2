//! # Views Module
//!
//! The todo view that renders the model into the document, plus the
//! terminal pieces that paint the document and prompt the user.

pub mod terminal_confirm;
pub mod terminal_renderer;
pub mod todo_view;

pub use terminal_confirm::TerminalConfirm;
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
pub use todo_view::{PageHandles, TodoView};

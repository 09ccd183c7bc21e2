//! # Controllers Module
//!
//! The todo controller that reacts to element events, and the application
//! controller that drives it from the terminal.

pub mod app_controller;
pub mod key_bindings;
pub mod todo_controller;

// Re-export main types for convenience
pub use app_controller::AppController;
pub use key_bindings::{map_key, KeyAction};
pub use todo_controller::{TodoController, DELETE_ALL_PROMPT};

//! # Models Module
//!
//! Todo list state and the seed payload it starts from.

pub mod seed;
pub mod todo_item;
pub mod todo_model;

pub use seed::{parse_seed, SeedItem, DEFAULT_SEED};
pub use todo_item::{ItemId, TodoItem};
pub use todo_model::{ItemCounts, TodoModel};

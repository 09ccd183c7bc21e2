//! # Seed Payload
//!
//! The list starts from a literal JSON array of `{name, done}` records that is
//! parsed once at startup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Compiled-in sample list used when no override is given
pub const DEFAULT_SEED: &str = r#"[
    { "name": "Learn the model/controller/view split", "done": true },
    { "name": "Build a todo list", "done": false }
]"#;

/// One record of the seed payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub name: String,
    pub done: bool,
}

/// Parse a seed payload
pub fn parse_seed(json: &str) -> Result<Vec<SeedItem>> {
    serde_json::from_str(json).context("Seed payload must be a JSON array of {name, done} records")
}

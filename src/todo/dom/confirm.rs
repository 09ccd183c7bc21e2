//! # Confirmation Dialog
//!
//! Synchronous yes/no prompt used before destructive operations.

use std::collections::VecDeque;

pub trait ConfirmDialog {
    /// Ask the user; blocks until answered
    fn confirm(&mut self, message: &str) -> bool;
}

/// Dialog that answers from a pre-programmed script and records what it was asked.
/// Answers `false` once the script runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<bool>,
    asked: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new(answers: Vec<bool>) -> Self {
        Self {
            answers: answers.into(),
            asked: Vec::new(),
        }
    }

    pub fn always(answer: bool) -> Self {
        Self::new(vec![answer; 16])
    }

    /// Messages shown so far
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl ConfirmDialog for ScriptedConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}

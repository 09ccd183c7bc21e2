//! # Terminal Confirmation Prompt
//!
//! [`ConfirmDialog`] that asks on the status row and blocks on the event
//! stream until the user answers.

use super::terminal_renderer::{TerminalRenderer, ViewRenderer};
use crate::todo::dom::ConfirmDialog;
use crate::todo::io::{EventStream, RenderStream};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct TerminalConfirm<'a, ES: EventStream, RS: RenderStream> {
    events: &'a mut ES,
    renderer: &'a mut TerminalRenderer<RS>,
}

impl<'a, ES: EventStream, RS: RenderStream> TerminalConfirm<'a, ES, RS> {
    pub fn new(events: &'a mut ES, renderer: &'a mut TerminalRenderer<RS>) -> Self {
        Self { events, renderer }
    }
}

impl<ES: EventStream, RS: RenderStream> ConfirmDialog for TerminalConfirm<'_, ES, RS> {
    /// `y` accepts. `n`, Esc, Ctrl+C, an I/O error or running out of input refuse.
    fn confirm(&mut self, message: &str) -> bool {
        if let Err(e) = self.renderer.render_prompt(message) {
            tracing::warn!("Failed to draw confirmation prompt: {}", e);
        }

        loop {
            match self.events.poll(POLL_INTERVAL) {
                Ok(true) => {}
                Ok(false) if self.events.is_exhausted() => return false,
                Ok(false) => continue,
                Err(e) => {
                    tracing::warn!("Confirmation aborted: {}", e);
                    return false;
                }
            }

            let key = match self.events.read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key,
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!("Confirmation aborted: {}", e);
                    return false;
                }
            };

            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => return true,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => return false,
                _ => tracing::debug!("Ignoring {:?} while confirming", key.code),
            }
        }
    }
}

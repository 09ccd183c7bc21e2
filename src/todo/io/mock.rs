//! # Mock I/O Implementations for Testing
//!
//! Pre-programmed input and a recording output stream that also keeps a
//! plain-text picture of the screen, so tests can assert on what a user
//! would see without a TTY.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Event stream fed from a queue
#[derive(Debug, Default)]
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn push_key(&mut self, code: KeyCode) {
        self.push_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    pub fn push_ctrl(&mut self, c: char) {
        self.push_event(Event::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )));
    }

    /// Queue one key press per character
    pub fn push_text(&mut self, text: &str) {
        for c in text.chars() {
            self.push_key(KeyCode::Char(c));
        }
    }

    pub fn pending_count(&self) -> usize {
        self.events.len()
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }

    fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Write(Vec<u8>),
    Flush,
}

#[derive(Debug)]
struct MockScreen {
    commands: Vec<RenderCommand>,
    rows: Vec<Vec<char>>,
    width: usize,
    cursor: (usize, usize),
    in_escape: bool,
    cursor_visible: bool,
    raw_mode: bool,
    alternate_screen: bool,
}

impl MockScreen {
    fn new((width, height): TerminalSize) -> Self {
        Self {
            commands: Vec::new(),
            rows: vec![Vec::new(); height as usize],
            width: width as usize,
            cursor: (0, 0),
            in_escape: false,
            cursor_visible: true,
            raw_mode: false,
            alternate_screen: false,
        }
    }

    fn clear(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
        self.cursor = (0, 0);
    }

    /// Place printable characters at the cursor, skipping CSI sequences.
    /// Like a terminal with autowrap, a character past the last column
    /// lands at the start of the next row.
    fn put(&mut self, text: &str) {
        for c in text.chars() {
            if self.in_escape {
                if c != '[' && ('@'..='~').contains(&c) {
                    self.in_escape = false;
                }
                continue;
            }
            match c {
                '\x1b' => self.in_escape = true,
                '\r' => self.cursor.0 = 0,
                '\n' => self.cursor = (0, self.cursor.1 + 1),
                _ => {
                    if self.cursor.0 >= self.width {
                        self.cursor = (0, self.cursor.1 + 1);
                    }
                    let (x, y) = self.cursor;
                    if let Some(row) = self.rows.get_mut(y) {
                        if row.len() <= x {
                            row.resize(x + 1, ' ');
                        }
                        row[x] = c;
                    }
                    self.cursor.0 += 1;
                }
            }
        }
    }
}

/// Render stream that records commands. Clones share the same recording.
#[derive(Debug, Clone)]
pub struct MockRenderStream {
    screen: Arc<Mutex<MockScreen>>,
    terminal_size: TerminalSize,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            screen: Arc::new(Mutex::new(MockScreen::new(size))),
            terminal_size: size,
        }
    }

    fn screen(&self) -> MutexGuard<'_, MockScreen> {
        self.screen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get_commands(&self) -> Vec<RenderCommand> {
        self.screen().commands.clone()
    }

    pub fn clear_commands(&mut self) {
        self.screen().commands.clear();
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.screen().commands.contains(command)
    }

    /// Screen rows as plain text with trailing blanks trimmed
    pub fn screen_lines(&self) -> Vec<String> {
        self.screen()
            .rows
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    /// Whole screen as plain text, one line per row
    pub fn screen_text(&self) -> String {
        self.screen_lines().join("\n")
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.screen().cursor_visible
    }

    pub fn is_raw_mode(&self) -> bool {
        self.screen().raw_mode
    }

    pub fn is_alternate_screen(&self) -> bool {
        self.screen().alternate_screen
    }

    fn record(&self, command: RenderCommand) {
        self.screen().commands.push(command);
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut screen = self.screen();
        screen.put(&String::from_utf8_lossy(buf));
        screen.commands.push(RenderCommand::Write(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.clear();
        screen.commands.push(RenderCommand::ClearScreen);
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        let mut screen = self.screen();
        screen.cursor = (x as usize, y as usize);
        screen.commands.push(RenderCommand::MoveCursor(x, y));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.cursor_visible = false;
        screen.commands.push(RenderCommand::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.cursor_visible = true;
        screen.commands.push(RenderCommand::ShowCursor);
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.alternate_screen = true;
        screen.commands.push(RenderCommand::EnterAlternateScreen);
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.alternate_screen = false;
        screen.commands.push(RenderCommand::LeaveAlternateScreen);
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.raw_mode = true;
        screen.commands.push(RenderCommand::EnableRawMode);
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.raw_mode = false;
        screen.commands.push(RenderCommand::DisableRawMode);
        Ok(())
    }
}

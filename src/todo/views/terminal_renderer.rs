//! # Terminal Renderer
//!
//! Paints the document onto a [`RenderStream`]. The page is laid out as a
//! title, the new-item row, the bulk-controls row, the item viewport and a
//! status row at the bottom. The viewport scrolls so the item holding focus
//! is always painted, and every row is clipped to the terminal width.

use crate::todo::dom::{Document, Element, ElementId, ElementKind, Role};
use crate::todo::io::{RenderStream, TerminalSize};
use crate::todo::models::ItemCounts;
use anyhow::Result;
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE: &str = "Tickline";
const NEW_ITEM_WIDTH: usize = 32;
const MAX_LABEL_WIDTH: usize = 48;
const INDENT: u16 = 2;
const FIRST_ITEM_ROW: u16 = 5;
const KEY_HINTS: &str = "Tab/↓ next  Shift+Tab/↑ prev  Enter/Space activate  Ctrl+C quit";

/// Rendering seam between the application loop and the terminal
pub trait ViewRenderer {
    /// Prepare the terminal for drawing
    fn initialize(&mut self) -> Result<()>;

    /// Repaint everything from the document
    fn render_full(&mut self, document: &Document, counts: ItemCounts) -> Result<()>;

    /// Show a question on the status row
    fn render_prompt(&mut self, message: &str) -> Result<()>;

    /// Restore the terminal
    fn cleanup(&mut self) -> Result<()>;
}

/// Which screen row a static page element belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageRow {
    NewItem,
    Controls,
    Items,
}

fn page_row(role: Role) -> Option<PageRow> {
    match role {
        Role::NewItemInput | Role::CreateButton => Some(PageRow::NewItem),
        Role::ToggleAll | Role::DeleteAll => Some(PageRow::Controls),
        Role::TodoList => Some(PageRow::Items),
        _ => None,
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Longest prefix of `text` that fits in `columns` display columns
fn clip(text: &str, columns: usize) -> &str {
    let mut used = 0;
    for (at, c) in text.char_indices() {
        used += c.width().unwrap_or(0);
        if used > columns {
            return &text[..at];
        }
    }
    text
}

pub struct TerminalRenderer<RS: RenderStream> {
    stream: RS,
    terminal_size: TerminalSize,
    first_visible_item: usize,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(stream: RS) -> Result<Self> {
        let terminal_size = stream.get_size()?;
        Ok(Self {
            stream,
            terminal_size,
            first_visible_item: 0,
        })
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    fn width(&self) -> usize {
        usize::from(self.terminal_size.0)
    }

    fn status_row(&self) -> u16 {
        self.terminal_size.1.saturating_sub(1)
    }

    /// Rows between the first item row and the status row
    fn item_area(&self) -> usize {
        usize::from(self.status_row().saturating_sub(FIRST_ITEM_ROW))
    }

    /// Number of items painted at once. When the list overflows, the last
    /// row of the area is kept for the "more below" marker.
    fn viewport_height(&self, total: usize) -> usize {
        let area = self.item_area();
        if total > area {
            area.saturating_sub(1)
        } else {
            area
        }
    }

    /// Shift the viewport just enough to bring the focused item into view
    fn scroll_to_item(&mut self, focused_item: Option<usize>, total: usize, height: usize) {
        let old_offset = self.first_visible_item;
        let mut offset = old_offset.min(total.saturating_sub(height));

        if let Some(index) = focused_item {
            if index < offset {
                offset = index;
            } else if height > 0 && index >= offset + height {
                offset = index + 1 - height;
            }
        }

        if offset != old_offset {
            tracing::debug!(
                "TerminalRenderer::scroll_to_item: focused={:?}, offset {} -> {}",
                focused_item,
                old_offset,
                offset
            );
        }
        self.first_visible_item = offset;
    }

    /// Label column width so delete buttons line up
    fn label_width(document: &Document, items: &[ElementId]) -> usize {
        items
            .iter()
            .filter_map(|item| document.child_with_role(*item, Role::ItemLabel))
            .filter_map(|label| document.get(label))
            .map(|label| label.text().width())
            .max()
            .unwrap_or(0)
            .min(MAX_LABEL_WIDTH)
    }

    /// Print `text` at (`column`, `row`), cut at the right edge
    fn print_clipped(
        &mut self,
        column: u16,
        row: u16,
        text: &str,
        attribute: Attribute,
    ) -> Result<()> {
        let room = self.width().saturating_sub(usize::from(column));
        self.stream.move_cursor(column, row)?;
        queue!(
            self.stream,
            SetAttribute(attribute),
            Print(clip(text, room)),
            SetAttribute(Attribute::Reset)
        )?;
        Ok(())
    }

    /// Draw one widget at the cursor within `room` columns and return the
    /// width drawn. For text inputs the column of the caret is reported too.
    fn draw_widget(
        &mut self,
        element: &Element,
        focused: bool,
        label_width: usize,
        room: usize,
    ) -> Result<(usize, Option<usize>)> {
        let mut caret = None;
        let text = match element.kind() {
            ElementKind::Checkbox => {
                if element.is_checked() {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
            ElementKind::TextInput => {
                let width = match element.role() {
                    Role::NewItemInput => NEW_ITEM_WIDTH,
                    _ => label_width.max(element.text().width() + 1),
                };
                caret = Some(1 + element.text().width());
                format!("[{:<width$}]", element.text(), width = width)
            }
            ElementKind::Label => {
                let pad = label_width.saturating_sub(element.text().width());
                format!("{}{}", element.text(), " ".repeat(pad))
            }
            ElementKind::Button => format!("<{}>", element.text()),
            ElementKind::Container => String::new(),
        };
        let text = clip(&text, room);

        if focused {
            queue!(self.stream, SetAttribute(Attribute::Reverse))?;
        }
        if element.is_struck() {
            queue!(self.stream, SetAttribute(Attribute::CrossedOut))?;
        }
        queue!(self.stream, Print(text), SetAttribute(Attribute::Reset))?;

        Ok((text.width(), caret))
    }

    /// Draw the displayed interactive elements as one row
    fn draw_row(
        &mut self,
        document: &Document,
        row: u16,
        widgets: &[ElementId],
        label_width: usize,
    ) -> Result<Option<(u16, u16)>> {
        if row >= self.status_row() {
            return Ok(None);
        }
        let width = self.width();
        let mut column = usize::from(INDENT);
        let mut cursor = None;
        self.stream.move_cursor(INDENT, row)?;

        for id in widgets {
            let Some(element) = document.get(*id) else {
                continue;
            };
            if !element.kind().is_interactive() || !document.is_displayed(*id) {
                continue;
            }
            let room = width.saturating_sub(column);
            if room == 0 {
                break;
            }
            let focused = document.focused() == Some(*id);
            let (drawn, caret) = self.draw_widget(element, focused, label_width, room)?;
            if let (true, Some(caret)) = (focused, caret) {
                let x = (column + caret).min(width.saturating_sub(1));
                cursor = Some((to_u16(x), row));
            }
            column += drawn;
            if column < width {
                queue!(self.stream, Print(" "))?;
                column += 1;
            }
        }
        Ok(cursor)
    }

    fn draw_status(&mut self, text: &str) -> Result<()> {
        let row = self.status_row();
        self.stream.move_cursor(0, row)?;
        let width = self.width();
        queue!(self.stream, Print(" ".repeat(width)))?;
        self.print_clipped(0, row, text, Attribute::Reset)
    }

    /// Paint the visible slice of the list plus overflow markers
    fn draw_items(
        &mut self,
        document: &Document,
        items: &[ElementId],
    ) -> Result<Option<(u16, u16)>> {
        if items.is_empty() {
            return self
                .print_clipped(INDENT, FIRST_ITEM_ROW, "Nothing to do.", Attribute::Dim)
                .map(|_| None);
        }

        let total = items.len();
        let height = self.viewport_height(total);
        let focused_item = document
            .focused()
            .and_then(|id| document.closest(id, Role::Item))
            .and_then(|item| items.iter().position(|candidate| *candidate == item));
        self.scroll_to_item(focused_item, total, height);

        let first = self.first_visible_item;
        let visible = &items[first..(first + height).min(total)];
        let label_width = Self::label_width(document, visible);

        let mut cursor = None;
        for (offset, item) in visible.iter().enumerate() {
            let row = FIRST_ITEM_ROW.saturating_add(to_u16(offset));
            let widgets = document.children(*item).to_vec();
            cursor = cursor.or(self.draw_row(document, row, &widgets, label_width)?);
        }

        if first > 0 {
            let marker = format!("↑ {} more", first);
            self.print_clipped(INDENT, FIRST_ITEM_ROW - 1, &marker, Attribute::Dim)?;
        }
        let below = total - first - visible.len();
        if below > 0 {
            let row = FIRST_ITEM_ROW.saturating_add(to_u16(visible.len()));
            if row < self.status_row() {
                let marker = format!("↓ {} more", below);
                self.print_clipped(INDENT, row, &marker, Attribute::Dim)?;
            }
        }
        Ok(cursor)
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.stream.enable_raw_mode()?;
        self.stream.enter_alternate_screen()?;
        self.stream.hide_cursor()?;
        self.stream.clear_screen()
    }

    fn render_full(&mut self, document: &Document, counts: ItemCounts) -> Result<()> {
        self.stream.hide_cursor()?;
        self.stream.clear_screen()?;

        self.print_clipped(INDENT, 0, TITLE, Attribute::Bold)?;

        let mut new_item_row = Vec::new();
        let mut controls_row = Vec::new();
        let mut items = Vec::new();
        for child in document.children(document.root()) {
            let Some(element) = document.get(*child) else {
                continue;
            };
            match page_row(element.role()) {
                Some(PageRow::NewItem) => new_item_row.push(*child),
                Some(PageRow::Controls) => controls_row.push(*child),
                Some(PageRow::Items) => items.extend_from_slice(document.children(*child)),
                None => {}
            }
        }

        let mut cursor = self.draw_row(document, 2, &new_item_row, 0)?;
        cursor = cursor.or(self.draw_row(document, 3, &controls_row, 0)?);
        cursor = cursor.or(self.draw_items(document, &items)?);

        let noun = if counts.num_items == 1 { "item" } else { "items" };
        let status = format!(
            " {} {}, {} done | {}",
            counts.num_items, noun, counts.num_done_items, KEY_HINTS
        );
        self.draw_status(&status)?;

        if let Some((x, y)) = cursor {
            self.stream.move_cursor(x, y)?;
            self.stream.show_cursor()?;
        }
        self.stream.flush()?;
        Ok(())
    }

    fn render_prompt(&mut self, message: &str) -> Result<()> {
        self.stream.hide_cursor()?;
        self.draw_status(&format!(" {} (y/n)", message))?;
        self.stream.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.stream.show_cursor()?;
        self.stream.leave_alternate_screen()?;
        self.stream.disable_raw_mode()
    }
}

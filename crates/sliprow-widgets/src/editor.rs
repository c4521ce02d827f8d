#![forbid(unsafe_code)]

//! Inline text editing surface.
//!
//! A single-line, grapheme-cluster-aware editor used as the row's text
//! surface. The editor only consumes events while focused; the row's
//! gesture claim rule reads the same focus flag.

use sliprow_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
use sliprow_core::geometry::Rect;
use sliprow_render::cell::{Cell, StyleFlags};
use sliprow_render::frame::Frame;
use sliprow_render::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::Widget;

/// A single-line text editing surface.
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    /// Text value.
    value: String,
    /// Cursor position (grapheme index).
    cursor: usize,
    /// Scroll offset (visual cells) for horizontal scrolling.
    scroll_cells: usize,
    /// Placeholder shown while the value is empty.
    placeholder: String,
    /// Whether the editor currently has focus.
    focused: bool,
    /// Base style.
    style: Style,
    /// Placeholder style.
    placeholder_style: Style,
}

impl LineEditor {
    /// Create a new empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder text (builder).
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the base style (builder).
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the placeholder style (builder).
    pub fn with_placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    /// Get the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value, moving the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.grapheme_count();
        self.scroll_cells = 0;
    }

    /// Clear all text.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.scroll_cells = 0;
    }

    /// Get the cursor position (grapheme index).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the editor has focus.
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Grant or revoke focus.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Cursor screen position relative to a render area, for
    /// [`Frame::set_cursor`].
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let cursor_visual = self.cursor_visual_pos();
        let scroll = self.effective_scroll(area.width as usize);
        let rel_x = cursor_visual.saturating_sub(scroll);
        let x = area
            .x
            .saturating_add(rel_x as u16)
            .min(area.right().saturating_sub(1));
        (x, area.y)
    }

    // --- Event handling ---

    /// Handle a terminal event. Events are ignored unless focused.
    ///
    /// Returns `true` if the editor state changed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if !self.focused {
            return false;
        }
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat => {
                self.handle_key(key)
            }
            Event::Paste(paste) => self.insert_str(&paste.text),
            _ => false,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(Modifiers::CTRL);

        match key.code {
            KeyCode::Char(c) if !ctrl => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                if ctrl {
                    self.delete_word_back()
                } else {
                    self.delete_char_back()
                }
            }
            KeyCode::Delete => {
                if ctrl {
                    self.delete_word_forward()
                } else {
                    self.delete_char_forward()
                }
            }
            KeyCode::Left => {
                if ctrl {
                    self.cursor = self.word_boundary_left();
                } else if self.cursor > 0 {
                    self.cursor -= 1;
                }
                true
            }
            KeyCode::Right => {
                if ctrl {
                    self.cursor = self.word_boundary_right();
                } else if self.cursor < self.grapheme_count() {
                    self.cursor += 1;
                }
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                self.scroll_cells = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.grapheme_count();
                true
            }
            _ => false,
        }
    }

    // --- Editing operations ---

    fn insert_char(&mut self, c: char) {
        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert(byte_offset, c);
        self.cursor += 1;
    }

    /// Insert a string at the cursor, skipping control characters.
    fn insert_str(&mut self, text: &str) -> bool {
        let filtered: String = text.chars().filter(|c| !c.is_control()).collect();
        if filtered.is_empty() {
            return false;
        }
        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert_str(byte_offset, &filtered);
        self.cursor += filtered.graphemes(true).count();
        true
    }

    fn delete_char_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_start = self.grapheme_byte_offset(self.cursor - 1);
        let byte_end = self.grapheme_byte_offset(self.cursor);
        self.value.drain(byte_start..byte_end);
        self.cursor -= 1;
        true
    }

    fn delete_char_forward(&mut self) -> bool {
        if self.cursor >= self.grapheme_count() {
            return false;
        }
        let byte_start = self.grapheme_byte_offset(self.cursor);
        let byte_end = self.grapheme_byte_offset(self.cursor + 1);
        self.value.drain(byte_start..byte_end);
        true
    }

    fn delete_word_back(&mut self) -> bool {
        let target = self.word_boundary_left();
        if target == self.cursor {
            return false;
        }
        let byte_start = self.grapheme_byte_offset(target);
        let byte_end = self.grapheme_byte_offset(self.cursor);
        self.value.drain(byte_start..byte_end);
        self.cursor = target;
        true
    }

    fn delete_word_forward(&mut self) -> bool {
        let target = self.word_boundary_right();
        if target == self.cursor {
            return false;
        }
        let byte_start = self.grapheme_byte_offset(self.cursor);
        let byte_end = self.grapheme_byte_offset(target);
        self.value.drain(byte_start..byte_end);
        true
    }

    /// Nearest word boundary left of the cursor: skip whitespace, then the
    /// word before it.
    fn word_boundary_left(&self) -> usize {
        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let mut pos = self.cursor;
        while pos > 0 && graphemes[pos - 1].trim().is_empty() {
            pos -= 1;
        }
        while pos > 0 && !graphemes[pos - 1].trim().is_empty() {
            pos -= 1;
        }
        pos
    }

    /// Nearest word boundary right of the cursor: skip the word under the
    /// cursor, then trailing whitespace.
    fn word_boundary_right(&self) -> usize {
        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let max = graphemes.len();
        let mut pos = self.cursor;
        while pos < max && !graphemes[pos].trim().is_empty() {
            pos += 1;
        }
        while pos < max && graphemes[pos].trim().is_empty() {
            pos += 1;
        }
        pos
    }

    // --- Internal helpers ---

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn grapheme_byte_offset(&self, grapheme_idx: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn cursor_visual_pos(&self) -> usize {
        self.value
            .graphemes(true)
            .take(self.cursor)
            .map(|g| UnicodeWidthStr::width(g))
            .sum()
    }

    fn effective_scroll(&self, viewport_width: usize) -> usize {
        if viewport_width == 0 {
            return 0;
        }
        let cursor_visual = self.cursor_visual_pos();
        let mut scroll = self.scroll_cells;
        if cursor_visual < scroll {
            scroll = cursor_visual;
        }
        if cursor_visual >= scroll + viewport_width {
            scroll = cursor_visual - viewport_width + 1;
        }
        scroll
    }
}

impl Widget for LineEditor {
    fn render(&self, area: Rect, frame: &mut Frame) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "LineEditor",
            x = area.x,
            y = area.y,
            w = area.width
        )
        .entered();

        if area.is_empty() {
            return;
        }

        let viewport_width = area.width as usize;
        let scroll = self.effective_scroll(viewport_width);
        let y = area.y;

        if self.value.is_empty() {
            // The cursor sits at 0 while empty, so the placeholder never
            // scrolls.
            crate::draw_text_span(
                &mut frame.buffer,
                area.x,
                y,
                &self.placeholder,
                self.placeholder_style,
                area.right(),
            );
        } else {
            let mut visual_x: usize = 0;
            for g in self.value.graphemes(true) {
                let w = UnicodeWidthStr::width(g);
                if w == 0 {
                    continue;
                }
                if visual_x + w <= scroll {
                    visual_x += w;
                    continue;
                }
                let rel_x = visual_x.saturating_sub(scroll);
                if rel_x >= viewport_width {
                    break;
                }
                if let Some(c) = g.chars().next() {
                    let mut cell = Cell::from_char(c);
                    crate::apply_style(&mut cell, self.style);
                    frame.buffer.set(area.x + rel_x as u16, y, cell);
                }
                visual_x += w;
            }
        }

        if self.focused {
            let cursor_rel_x = self.cursor_visual_pos().saturating_sub(scroll);
            if cursor_rel_x < viewport_width {
                let cursor_screen_x = area.x + cursor_rel_x as u16;
                if let Some(cell) = frame.buffer.get_mut(cursor_screen_x, y) {
                    cell.attrs ^= StyleFlags::REVERSE;
                }
                frame.set_cursor(Some((cursor_screen_x, y)));
            }
        }
    }
}

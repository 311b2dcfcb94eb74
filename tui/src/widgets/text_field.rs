//! TextField Widget
//!
//! An editable form field. The text itself lives in the store draft - the
//! widget only knows how to render a value with a cursor, and
//! [`TextCursor`] knows how to derive the next value from a keystroke.
//! This keeps the store the single source of truth: every edit goes
//! through `set_field`.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::theme;

/// Cursor over the focused field's text, tracked as a char index
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextCursor {
    /// Position in chars, 0..=len
    pub pos: usize,
}

impl TextCursor {
    /// Cursor at the end of `text`
    pub fn at_end(text: &str) -> Self {
        Self {
            pos: text.chars().count(),
        }
    }

    /// Move one char left
    pub fn left(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// Move one char right
    pub fn right(&mut self, text: &str) {
        self.pos = (self.pos + 1).min(text.chars().count());
    }

    /// Jump to the start
    pub fn home(&mut self) {
        self.pos = 0;
    }

    /// Jump to the end of `text`
    pub fn end(&mut self, text: &str) {
        self.pos = text.chars().count();
    }

    /// New value with `c` inserted at the cursor; the cursor advances
    pub fn insert(&mut self, text: &str, c: char) -> String {
        let at = byte_index(text, self.pos);
        let mut next = String::with_capacity(text.len() + c.len_utf8());
        next.push_str(&text[..at]);
        next.push(c);
        next.push_str(&text[at..]);
        self.pos += 1;
        next
    }

    /// New value with the char before the cursor removed; `None` at the start
    pub fn backspace(&mut self, text: &str) -> Option<String> {
        if self.pos == 0 {
            return None;
        }
        let start = byte_index(text, self.pos - 1);
        let end = byte_index(text, self.pos);
        self.pos -= 1;
        Some(format!("{}{}", &text[..start], &text[end..]))
    }

    /// New value with the char under the cursor removed; `None` at the end
    pub fn delete(&self, text: &str) -> Option<String> {
        let start = byte_index(text, self.pos);
        if start >= text.len() {
            return None;
        }
        let end = byte_index(text, self.pos + 1);
        Some(format!("{}{}", &text[..start], &text[end..]))
    }
}

/// Byte offset of the char at `pos` (text length when past the end)
fn byte_index(text: &str, pos: usize) -> usize {
    text.char_indices()
        .nth(pos)
        .map_or(text.len(), |(index, _)| index)
}

/// Build display lines for `value` with a reversed cursor marker at
/// `cursor`. Newlines split lines; a cursor sitting on a newline or at the
/// end of the value renders as a reversed space.
pub fn cursor_lines(value: &str, cursor: TextCursor, style: Style) -> Vec<Line<'static>> {
    let cursor_style = style.add_modifier(Modifier::REVERSED);
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut index = 0;

    let mut flush = |spans: &mut Vec<Span<'static>>, run: &mut String| {
        if !run.is_empty() {
            spans.push(Span::styled(std::mem::take(run), style));
        }
    };

    for c in value.chars() {
        let under_cursor = index == cursor.pos;
        if c == '\n' {
            flush(&mut spans, &mut run);
            if under_cursor {
                spans.push(Span::styled(" ", cursor_style));
            }
            lines.push(Line::from(std::mem::take(&mut spans)));
        } else if under_cursor {
            flush(&mut spans, &mut run);
            spans.push(Span::styled(c.to_string(), cursor_style));
        } else {
            run.push(c);
        }
        index += 1;
    }

    flush(&mut spans, &mut run);
    if index == cursor.pos {
        spans.push(Span::styled(" ", cursor_style));
    }
    lines.push(Line::from(spans));
    lines
}

/// An editable single-line form field: label, value, optional error
pub struct TextField<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    error: Option<&'a str>,
    cursor: Option<TextCursor>,
}

impl<'a> TextField<'a> {
    /// Field with a label and current value
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            error: None,
            cursor: None,
        }
    }

    /// Dim placeholder shown while the value is empty
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Inline validation message shown under the input
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Mark the field focused and render the cursor
    pub fn focused(mut self, cursor: TextCursor) -> Self {
        self.cursor = Some(cursor);
        self
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let focused = self.cursor.is_some();
        let label_style = if focused {
            Style::default()
                .fg(theme::INK_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT)
        };
        buf.set_string(area.x, area.y, self.label, label_style);

        if area.height < 2 {
            return;
        }
        let input_area = Rect::new(area.x, area.y + 1, area.width, 1);
        let value_style = Style::default().fg(theme::TEXT);
        let line = match self.cursor {
            Some(cursor) => cursor_lines(self.value, cursor, value_style)
                .into_iter()
                .next()
                .unwrap_or_default(),
            None if self.value.is_empty() => {
                Line::styled(self.placeholder.to_string(), Style::default().fg(theme::DIM_GRAY))
            }
            None => Line::styled(self.value.to_string(), value_style),
        };
        Paragraph::new(line)
            .wrap(Wrap { trim: false })
            .render(input_area, buf);

        if let (Some(error), true) = (self.error, area.height >= 3) {
            buf.set_string(
                area.x,
                area.y + 2,
                error,
                Style::default().fg(theme::ERROR_RED),
            );
        }
    }
}

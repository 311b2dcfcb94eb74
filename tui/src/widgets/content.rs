//! ContentView Widget
//!
//! A borderless, scrollable region for long post bodies. Paragraphs are
//! re-wrapped to the render width on every frame, so the scroll range is
//! recomputed as part of rendering and kept in the state.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::StatefulWidget;
use textwrap::wrap;

/// Scroll state for a [`ContentView`]
#[derive(Clone, Copy, Debug, Default)]
pub struct ContentViewState {
    /// Lines scrolled past the top
    pub offset: usize,
    /// Maximum offset as of the last render
    pub max_offset: usize,
}

impl ContentViewState {
    /// Scroll by `delta` lines (positive = down), clamped to the range
    /// observed at the last render
    pub fn scroll_by(&mut self, delta: i32) {
        let next = self.offset as i64 + i64::from(delta);
        self.offset = usize::try_from(next.max(0)).unwrap_or(0).min(self.max_offset);
    }

}

/// A borderless, scrollable wrapped-text region
pub struct ContentView<'a> {
    text: &'a str,
    style: Style,
}

impl<'a> ContentView<'a> {
    /// View over `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            style: Style::default(),
        }
    }

    /// Base text style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl StatefulWidget for ContentView<'_> {
    type State = ContentViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;
        let mut lines: Vec<String> = Vec::new();
        for raw in self.text.lines() {
            if raw.is_empty() {
                lines.push(String::new());
            } else {
                lines.extend(wrap(raw, width).into_iter().map(|cow| cow.into_owned()));
            }
        }

        state.max_offset = lines.len().saturating_sub(area.height as usize);
        state.offset = state.offset.min(state.max_offset);

        for (row, line) in lines
            .iter()
            .skip(state.offset)
            .take(area.height as usize)
            .enumerate()
        {
            buf.set_string(area.x, area.y + row as u16, line, self.style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_clamps_to_observed_range() {
        let mut state = ContentViewState {
            offset: 0,
            max_offset: 5,
        };
        state.scroll_by(3);
        assert_eq!(state.offset, 3);
        state.scroll_by(10);
        assert_eq!(state.offset, 5);
        state.scroll_by(-100);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_render_updates_max_offset() {
        let mut state = ContentViewState::default();
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        // Four short paragraphs into a two-line viewport.
        let view = ContentView::new("one\ntwo\nthree\nfour");
        view.render(area, &mut buf, &mut state);
        assert_eq!(state.max_offset, 2);
    }
}

//! Post List View
//!
//! Newest-first list of published posts. The empty-state message is gated
//! on hydration: until the store reports its collection loaded, the view
//! shows a loading line instead of claiming there are no posts.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use quill_core::WizardStore;

use crate::theme;

/// Selection state for the list view
#[derive(Clone, Copy, Debug, Default)]
pub struct ListViewState {
    /// Index of the selected post
    pub selected: usize,
}

impl ListViewState {
    /// Move the selection up
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the selection down within a list of `len` posts
    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    /// Keep the selection in range after the list changed
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// Render the list view
pub fn render(frame: &mut Frame, area: Rect, store: &WizardStore, state: &ListViewState) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let count = store.posts().len();
    let title = Line::from(vec![
        Span::styled(
            "quill",
            Style::default()
                .fg(theme::INK_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  your posts ({count})"),
            Style::default().fg(theme::DIM_GRAY),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), header);

    if !store.is_hydrated() {
        // The collection is not authoritative yet.
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(theme::DIM_GRAY))
            .alignment(Alignment::Center);
        frame.render_widget(loading, body);
    } else if store.posts().is_empty() {
        let empty = Paragraph::new("No posts yet. Press n to write your first.")
            .style(Style::default().fg(theme::DIM_GRAY))
            .alignment(Alignment::Center);
        frame.render_widget(empty, body);
    } else {
        let width = body.width as usize;
        let items: Vec<ListItem> = store
            .posts()
            .all()
            .iter()
            .map(|post| {
                let mut heading = vec![Span::styled(
                    post.title.clone(),
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )];
                if !post.category.is_empty() {
                    heading.push(Span::raw(" "));
                    heading.push(Span::styled(
                        format!(" {} ", post.category),
                        Style::default().fg(theme::CHIP_FG).bg(theme::CHIP_BG),
                    ));
                }
                heading.push(Span::styled(
                    format!("  {}", post.created_at),
                    Style::default().fg(theme::DIM_GRAY),
                ));

                let byline = format!("by {} — {}", post.author, post.summary);
                let byline = truncate_to_width(&byline, width.saturating_sub(2));
                ListItem::new(vec![
                    Line::from(heading),
                    Line::styled(byline, Style::default().fg(theme::DIM_GRAY)),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▌ ");
        let mut list_state = ListState::default().with_selected(Some(state.selected));
        frame.render_stateful_widget(list, body, &mut list_state);
    }

    let hints = Paragraph::new("↑/↓ select · Enter open · n new post · q quit")
        .style(Style::default().fg(theme::DIM_GRAY));
    frame.render_widget(hints, footer);
}

/// Truncate to a display width, appending an ellipsis when cut
fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        if out.width() + 2 > width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_stays_in_range() {
        let mut state = ListViewState::default();
        state.select_prev();
        assert_eq!(state.selected, 0);

        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected, 2);

        state.clamp(1);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_truncate_wide_text() {
        assert_eq!(truncate_to_width("short", 10), "short");
        let cut = truncate_to_width("a rather long byline", 8);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 8);
    }
}

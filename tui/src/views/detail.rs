//! Post Detail View
//!
//! Full render of one post. A missing id is a normal, expected miss - the
//! view shows a not-found affordance instead of faulting.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use quill_core::BlogPost;

use crate::theme;
use crate::widgets::{ContentView, ContentViewState};

/// Scroll state for the detail view
#[derive(Clone, Copy, Debug, Default)]
pub struct DetailViewState {
    /// Scroll state of the content region
    pub content: ContentViewState,
}

/// Render the detail view; `post` is `None` when the id is absent
pub fn render(frame: &mut Frame, area: Rect, post: Option<&BlogPost>, state: &mut DetailViewState) {
    let Some(post) = post else {
        render_not_found(frame, area);
        return;
    };

    let [header, meta, summary, content, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let title = Paragraph::new(post.title.clone()).style(
        Style::default()
            .fg(theme::INK_ACCENT)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, header);

    let mut meta_spans = vec![Span::styled(
        format!("by {} · {}", post.author, post.created_at),
        Style::default().fg(theme::DIM_GRAY),
    )];
    if !post.category.is_empty() {
        meta_spans.push(Span::raw("  "));
        meta_spans.push(Span::styled(
            format!(" {} ", post.category),
            Style::default().fg(theme::CHIP_FG).bg(theme::CHIP_BG),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(meta_spans)), meta);

    let summary_text = Paragraph::new(post.summary.clone()).style(
        Style::default()
            .fg(theme::DIM_GRAY)
            .add_modifier(Modifier::ITALIC),
    );
    frame.render_widget(summary_text, summary);

    frame.render_stateful_widget(
        ContentView::new(&post.content).style(Style::default().fg(theme::TEXT)),
        content,
        &mut state.content,
    );

    let hints = Paragraph::new("↑/↓ scroll · Esc back")
        .style(Style::default().fg(theme::DIM_GRAY));
    frame.render_widget(hints, footer);
}

fn render_not_found(frame: &mut Frame, area: Rect) {
    let [_, message, hint, _] = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new("Post not found")
            .style(
                Style::default()
                    .fg(theme::TEXT)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
        message,
    );
    frame.render_widget(
        Paragraph::new("It may have been removed. Press Esc to go back.")
            .style(Style::default().fg(theme::DIM_GRAY))
            .alignment(Alignment::Center),
        hint,
    );
}

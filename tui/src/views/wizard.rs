//! Creation Wizard View
//!
//! The four-step authoring flow: metadata, summary & category, content,
//! review. The view renders the store's current step with inline
//! validation messages under the offending inputs; all gating lives in the
//! store, the form state here only tracks focus, the cursor, and the last
//! rejection to display.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use quill_core::{Field, FormDraft, ValidationErrors, ValidationSchema, WizardStep, WizardStore};

use crate::theme;
use crate::widgets::{cursor_lines, TextCursor, TextField};

/// Categories offered by the step-2 selector
pub const CATEGORIES: [&str; 5] = ["Tech", "Lifestyle", "Business", "Travel", "Food"];

/// Editable fields per step, in focus order
#[must_use]
pub fn step_fields(step: WizardStep) -> &'static [Field] {
    match step {
        WizardStep::Metadata => &[Field::Title, Field::Author],
        WizardStep::SummaryCategory => &[Field::Summary, Field::Category],
        WizardStep::Content => &[Field::Content],
        WizardStep::Review => &[],
    }
}

/// Form UI state: focus, cursor, and the last rejection to display
#[derive(Clone, Debug, Default)]
pub struct WizardFormState {
    /// Index into the current step's field list
    pub focus: usize,
    /// Failures from the last rejected advance, cleared incrementally
    pub errors: ValidationErrors,
    /// Cursor over the focused field's text
    pub cursor: TextCursor,
}

impl WizardFormState {
    /// Fresh form state for step 1
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The field currently focused, if the step has any
    #[must_use]
    pub fn focused_field(&self, step: WizardStep) -> Option<Field> {
        step_fields(step).get(self.focus).copied()
    }

    /// Focus the next field of the step, wrapping around
    pub fn focus_next(&mut self, step: WizardStep, draft: &FormDraft) {
        self.shift_focus(step, draft, 1);
    }

    /// Focus the previous field of the step, wrapping around
    pub fn focus_prev(&mut self, step: WizardStep, draft: &FormDraft) {
        self.shift_focus(step, draft, -1);
    }

    fn shift_focus(&mut self, step: WizardStep, draft: &FormDraft, delta: i32) {
        let fields = step_fields(step);
        if fields.len() < 2 {
            return;
        }
        let len = fields.len() as i32;
        let next = (self.focus as i32 + delta).rem_euclid(len) as usize;
        self.focus = next;
        self.cursor = TextCursor::at_end(draft.get(fields[next]));
    }

    /// Reset focus and cursor for a newly entered step
    pub fn enter_step(&mut self, step: WizardStep, draft: &FormDraft) {
        self.focus = 0;
        self.cursor = step_fields(step)
            .first()
            .map(|field| TextCursor::at_end(draft.get(*field)))
            .unwrap_or_default();
    }

    /// Re-run the step schema after an edit so fixed fields drop their
    /// messages immediately. Only runs while a rejection is on display.
    pub fn refresh_errors(&mut self, step: WizardStep, draft: &FormDraft) {
        if !self.errors.is_empty() {
            self.errors = ValidationSchema::for_step(step).validate(draft);
        }
    }

    fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

/// Render the wizard view
pub fn render(frame: &mut Frame, area: Rect, store: &WizardStore, form: &WizardFormState) {
    let [navbar, progress, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let step = store.current_step();

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                "Create New Blog Post",
                Style::default()
                    .fg(theme::INK_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Esc cancel", Style::default().fg(theme::DIM_GRAY)),
        ])),
        navbar,
    );

    render_progress(frame, progress, step);

    match step {
        WizardStep::Metadata => render_metadata(frame, body, store.draft(), form),
        WizardStep::SummaryCategory => render_summary(frame, body, store.draft(), form),
        WizardStep::Content => render_content(frame, body, store.draft(), form),
        WizardStep::Review => render_review(frame, body, store.draft()),
    }

    let hints = match step {
        WizardStep::Review => "Enter submit · Ctrl-b back · Esc cancel",
        WizardStep::Metadata => "Tab next field · Ctrl-n next step · Esc cancel",
        _ => "Tab next field · Ctrl-n next · Ctrl-b back · Esc cancel",
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(theme::DIM_GRAY)),
        footer,
    );
}

/// Step progress header: one segment per step plus the current title
fn render_progress(frame: &mut Frame, area: Rect, current: WizardStep) {
    let mut segments: Vec<Span> = Vec::new();
    for step in WizardStep::ALL {
        let style = if step == current {
            Style::default()
                .fg(theme::INK_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else if step < current {
            Style::default().fg(theme::STEP_DONE)
        } else {
            Style::default().fg(theme::STEP_PENDING)
        };
        let marker = if step < current { "●" } else { "○" };
        segments.push(Span::styled(
            format!("{marker} Step {}  ", step.number()),
            style,
        ));
    }

    let lines = vec![
        Line::from(segments),
        Line::styled(current.to_string(), Style::default().fg(theme::TEXT)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_metadata(frame: &mut Frame, area: Rect, draft: &FormDraft, form: &WizardFormState) {
    let [title_area, author_area, _] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .areas(area);

    let mut title = TextField::new(Field::Title.label(), &draft.title)
        .placeholder("e.g., My First Blog Post")
        .error(form.error_for(Field::Title));
    if form.focused_field(WizardStep::Metadata) == Some(Field::Title) {
        title = title.focused(form.cursor);
    }
    frame.render_widget(title, title_area);

    let mut author = TextField::new(Field::Author.label(), &draft.author)
        .placeholder("e.g., John Doe")
        .error(form.error_for(Field::Author));
    if form.focused_field(WizardStep::Metadata) == Some(Field::Author) {
        author = author.focused(form.cursor);
    }
    frame.render_widget(author, author_area);
}

fn render_summary(frame: &mut Frame, area: Rect, draft: &FormDraft, form: &WizardFormState) {
    let [summary_area, category_area, _] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .areas(area);

    let mut summary = TextField::new(Field::Summary.label(), &draft.summary)
        .placeholder("A short and engaging summary of your post...")
        .error(form.error_for(Field::Summary));
    if form.focused_field(WizardStep::SummaryCategory) == Some(Field::Summary) {
        summary = summary.focused(form.cursor);
    }
    frame.render_widget(summary, summary_area);

    render_category_selector(frame, category_area, draft, form);
}

/// Category chips with the current selection highlighted
fn render_category_selector(frame: &mut Frame, area: Rect, draft: &FormDraft, form: &WizardFormState) {
    let focused = form.focused_field(WizardStep::SummaryCategory) == Some(Field::Category);
    let label_style = if focused {
        Style::default()
            .fg(theme::INK_ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::TEXT)
    };

    let mut chips: Vec<Span> = Vec::new();
    for category in CATEGORIES {
        let selected = draft.category == category;
        let style = if selected {
            Style::default().fg(theme::CHIP_FG).bg(theme::CHIP_BG)
        } else {
            Style::default().fg(theme::DIM_GRAY)
        };
        chips.push(Span::styled(format!(" {category} "), style));
        chips.push(Span::raw(" "));
    }
    if draft.category.is_empty() {
        chips.push(Span::styled(
            "  ←/→ to choose",
            Style::default().fg(theme::DIM_GRAY),
        ));
    }

    let mut lines = vec![
        Line::styled(Field::Category.label(), label_style),
        Line::from(chips),
    ];
    if let Some(error) = form.error_for(Field::Category) {
        lines.push(Line::styled(
            error.to_string(),
            Style::default().fg(theme::ERROR_RED),
        ));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_content(frame: &mut Frame, area: Rect, draft: &FormDraft, form: &WizardFormState) {
    let has_error = form.error_for(Field::Content).is_some();
    let [label_area, input_area, error_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(u16::from(has_error)),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Field::Content.label()).style(
            Style::default()
                .fg(theme::INK_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        label_area,
    );

    let text_style = Style::default().fg(theme::TEXT);
    let lines = if draft.content.is_empty() {
        let mut lines = cursor_lines("", form.cursor, text_style);
        lines.push(Line::styled(
            "Write your full blog post here (at least 50 characters).",
            Style::default().fg(theme::DIM_GRAY),
        ));
        lines
    } else {
        cursor_lines(&draft.content, form.cursor, text_style)
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), input_area);

    if let Some(error) = form.error_for(Field::Content) {
        frame.render_widget(
            Paragraph::new(error.to_string()).style(Style::default().fg(theme::ERROR_RED)),
            error_area,
        );
    }
}

/// Review sheet: every entered field, content preview last
fn render_review(frame: &mut Frame, area: Rect, draft: &FormDraft) {
    let [heading_area, rows_area, content_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Min(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new("Review Your Post").style(
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        heading_area,
    );

    let label = |text: &str| Span::styled(format!("{text:<10}"), Style::default().fg(theme::DIM_GRAY));
    let rows = vec![
        Line::from(vec![
            label("Title"),
            Span::styled(draft.title.clone(), Style::default().fg(theme::TEXT)),
        ]),
        Line::from(vec![
            label("Author"),
            Span::styled(draft.author.clone(), Style::default().fg(theme::TEXT)),
        ]),
        Line::from(vec![
            label("Category"),
            Span::styled(
                format!(" {} ", draft.category),
                Style::default().fg(theme::CHIP_FG).bg(theme::CHIP_BG),
            ),
        ]),
        Line::from(vec![
            label("Summary"),
            Span::styled(draft.summary.clone(), Style::default().fg(theme::TEXT)),
        ]),
    ];
    frame.render_widget(Paragraph::new(rows), rows_area);

    let content = Paragraph::new(draft.content.clone())
        .style(Style::default().fg(theme::TEXT))
        .wrap(Wrap { trim: false });
    frame.render_widget(content, content_area);
}

/// Index of the draft's category among the offered ones
#[must_use]
pub fn category_index(draft: &FormDraft) -> Option<usize> {
    CATEGORIES.iter().position(|c| draft.category == *c)
}

/// The category `delta` chips away from the current selection
#[must_use]
pub fn cycle_category(draft: &FormDraft, delta: i32) -> &'static str {
    let len = CATEGORIES.len() as i32;
    let next = match category_index(draft) {
        Some(index) => (index as i32 + delta).rem_euclid(len),
        None if delta < 0 => len - 1,
        None => 0,
    };
    CATEGORIES[next as usize]
}

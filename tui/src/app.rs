//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Event loop (keyboard, resize) over the crossterm event stream
//! - StoreClient for all state operations
//! - Per-view UI state (selection, scroll, form focus) for rendering
//!
//! The first frame renders before hydration, so the list view shows its
//! loading state until the store reports the persisted posts loaded; all
//! business rules (validation, step gating, finalization, persistence)
//! live in the store.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use quill_core::{Field, PostId, StepAdvance, StoreUpdate, WizardStep};

use crate::store_client::StoreClient;
use crate::theme;
use crate::views::detail::{self, DetailViewState};
use crate::views::list::{self, ListViewState};
use crate::views::wizard::{self, cycle_category, WizardFormState};

/// How long a status line stays visible
const STATUS_TTL: Duration = Duration::from_secs(3);

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Which view is active
#[derive(Clone, Debug, PartialEq, Eq)]
enum View {
    /// Post list (the landing view)
    List,
    /// One post, by id
    Detail(PostId),
    /// The creation wizard
    Wizard,
}

/// Severity of the status line
#[derive(Clone, Copy, Debug)]
enum StatusLevel {
    Success,
    Warning,
}

/// A transient status line shown at the bottom of the screen
struct StatusLine {
    text: String,
    level: StatusLevel,
    shown_at: Instant,
}

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// Client for the embedded wizard store
    client: StoreClient,
    /// Active view
    view: View,
    /// List view selection
    list: ListViewState,
    /// Detail view scroll
    detail: DetailViewState,
    /// Wizard form focus/cursor/errors
    wizard: WizardFormState,
    /// Transient status line
    status: Option<StatusLine>,
}

impl App {
    /// App over the configured storage
    #[must_use]
    pub fn new() -> Self {
        Self::with_client(StoreClient::new())
    }

    /// App over an explicit client (tests, custom storage)
    #[must_use]
    pub fn with_client(client: StoreClient) -> Self {
        Self {
            running: true,
            client,
            view: View::List,
            list: ListViewState::default(),
            detail: DetailViewState::default(),
            wizard: WizardFormState::new(),
            status: None,
        }
    }

    /// Run the app until quit, restoring the terminal on the way out
    pub async fn run(mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal()?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        // First frame shows the loading state; hydration happens after it.
        terminal.draw(|frame| self.render(frame))?;
        self.client.hydrate().await;
        self.drain_updates();

        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => {
                        self.handle_event(event).await;
                        self.drain_updates();
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                _ = tick.tick() => self.expire_status(),
            }
        }
        Ok(())
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn render(&mut self, frame: &mut Frame) {
        let [body, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        match &self.view {
            View::List => list::render(frame, body, self.client.store(), &self.list),
            View::Detail(id) => {
                let post = self.client.store().post(id);
                detail::render(frame, body, post, &mut self.detail);
            }
            View::Wizard => wizard::render(frame, body, self.client.store(), &self.wizard),
        }

        self.render_status(frame, status_area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let Some(status) = &self.status else { return };
        let color = match status.level {
            StatusLevel::Success => theme::SUCCESS_GREEN,
            StatusLevel::Warning => theme::WARNING_AMBER,
        };
        frame.render_widget(
            Paragraph::new(status.text.clone()).style(Style::default().fg(color)),
            area,
        );
    }

    // ========================================================================
    // Store updates
    // ========================================================================

    fn drain_updates(&mut self) {
        while let Some(update) = self.client.try_update() {
            match update {
                StoreUpdate::StorageWarning { detail } => {
                    self.set_status(format!("Storage warning: {detail}"), StatusLevel::Warning);
                }
                StoreUpdate::HydrationComplete { post_count } => {
                    tracing::debug!(post_count, "Hydrated");
                    self.list.clamp(post_count);
                }
                other => tracing::trace!(?other, "Store update"),
            }
        }
    }

    fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusLine {
            text: text.into(),
            level,
            shown_at: Instant::now(),
        });
    }

    fn expire_status(&mut self) {
        if let Some(status) = &self.status {
            if status.shown_at.elapsed() >= STATUS_TTL {
                self.status = None;
            }
        }
    }

    // ========================================================================
    // Input handling
    // ========================================================================

    async fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else { return };
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.running = false;
            return;
        }
        match self.view.clone() {
            View::List => self.handle_list_key(key),
            View::Detail(_) => self.handle_detail_key(key),
            View::Wizard => self.handle_wizard_key(key).await,
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let len = self.client.store().posts().len();
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Up | KeyCode::Char('k') => self.list.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(len),
            KeyCode::Enter => {
                if let Some(post) = self.client.store().posts().all().get(self.list.selected) {
                    self.detail = DetailViewState::default();
                    self.view = View::Detail(post.id.clone());
                }
            }
            KeyCode::Char('n') => {
                let step = self.client.store().current_step();
                self.wizard.enter_step(step, self.client.store().draft());
                self.view = View::Wizard;
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => self.view = View::List,
            KeyCode::Up | KeyCode::Char('k') => self.detail.content.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.detail.content.scroll_by(1),
            KeyCode::PageUp => self.detail.content.scroll_by(-10),
            KeyCode::PageDown => self.detail.content.scroll_by(10),
            _ => {}
        }
    }

    async fn handle_wizard_key(&mut self, key: KeyEvent) {
        let step = self.client.store().current_step();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.view = View::List,
            KeyCode::Char('n') if ctrl => self.wizard_next(),
            KeyCode::Char('b') if ctrl => self.wizard_back(),
            KeyCode::Char(c @ '1'..='4') if key.modifiers.contains(KeyModifiers::ALT) => {
                let step = self.client.store_mut().go_to_step(c as u8 - b'0');
                self.wizard.errors.clear();
                self.wizard.enter_step(step, self.client.store().draft());
            }
            KeyCode::Enter if step.is_review() => self.submit_post().await,
            _ => self.handle_wizard_edit(step, key),
        }
    }

    fn wizard_next(&mut self) {
        match self.client.store_mut().next_step() {
            StepAdvance::Advanced(step) => {
                self.wizard.errors.clear();
                self.wizard.enter_step(step, self.client.store().draft());
            }
            StepAdvance::Rejected(errors) => self.wizard.errors = errors,
        }
    }

    fn wizard_back(&mut self) {
        let step = self.client.store_mut().prev_step();
        self.wizard.errors.clear();
        self.wizard.enter_step(step, self.client.store().draft());
    }

    async fn submit_post(&mut self) {
        let id = self.client.store_mut().add_post().await;
        tracing::debug!(%id, "Submitted post");
        self.client.store_mut().reset_form();
        self.wizard = WizardFormState::new();
        self.list = ListViewState::default();
        self.view = View::List;
        self.set_status("Post created successfully", StatusLevel::Success);
    }

    fn handle_wizard_edit(&mut self, step: WizardStep, key: KeyEvent) {
        let Some(field) = self.wizard.focused_field(step) else {
            return;
        };

        if field == Field::Category {
            self.handle_category_key(step, key);
            return;
        }

        let draft = self.client.store().draft();
        let text = draft.get(field).to_string();
        match key.code {
            KeyCode::Tab => self.wizard.focus_next(step, draft),
            KeyCode::BackTab => self.wizard.focus_prev(step, draft),
            KeyCode::Down if field != Field::Content => self.wizard.focus_next(step, draft),
            KeyCode::Up if field != Field::Content => self.wizard.focus_prev(step, draft),
            KeyCode::Left => self.wizard.cursor.left(),
            KeyCode::Right => self.wizard.cursor.right(&text),
            KeyCode::Home => self.wizard.cursor.home(),
            KeyCode::End => self.wizard.cursor.end(&text),
            KeyCode::Enter if field == Field::Content => {
                let next = self.wizard.cursor.insert(&text, '\n');
                self.write_field(step, field, next);
            }
            KeyCode::Enter => self.wizard.focus_next(step, draft),
            KeyCode::Backspace => {
                if let Some(next) = self.wizard.cursor.backspace(&text) {
                    self.write_field(step, field, next);
                }
            }
            KeyCode::Delete => {
                if let Some(next) = self.wizard.cursor.delete(&text) {
                    self.write_field(step, field, next);
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let next = self.wizard.cursor.insert(&text, c);
                self.write_field(step, field, next);
            }
            _ => {}
        }
    }

    fn handle_category_key(&mut self, step: WizardStep, key: KeyEvent) {
        let draft = self.client.store().draft();
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.wizard.focus_next(step, draft),
            KeyCode::BackTab | KeyCode::Up => self.wizard.focus_prev(step, draft),
            KeyCode::Left => {
                let choice = cycle_category(draft, -1);
                self.write_field(step, Field::Category, choice.to_string());
            }
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
                let choice = cycle_category(draft, 1);
                self.write_field(step, Field::Category, choice.to_string());
            }
            _ => {}
        }
    }

    fn write_field(&mut self, step: WizardStep, field: Field, value: String) {
        self.client.store_mut().set_field(field, value);
        self.wizard.refresh_errors(step, self.client.store().draft());
    }
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

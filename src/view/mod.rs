//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod layout;
mod post_pane;
mod search_input;
mod styles;
mod user_list;

pub use help::render_help_overlay;
pub use layout::{calculate_areas, header_line, render_layout, DashboardAreas};
pub use search_input::SearchBar;
pub use styles::{ColorConfig, DashboardStyles};
pub use user_list::truncate_to_width;

use crate::config::KeyBindings;
use crate::directory::{DirectoryError, DirectoryRequest, DirectoryWorker, WorkerError};
use crate::model::{KeyAction, SortKey};
use crate::state::{
    apply_response, handle_cursor_action, handle_post_scroll, handle_search_edit,
    load_more_posts, load_users, search_input_handler, select_highlighted_user, FocusPane,
    SearchEdit, SearchInput, ViewState, DEFAULT_PAGE_SIZE,
};
use constants::TICK_INTERVAL;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The directory worker stopped responding
    #[error("Directory worker error: {0}")]
    Worker(#[from] WorkerError),
}

/// Initial dashboard settings resolved from config and CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOptions {
    /// Initial sort key.
    pub sort: SortKey,
    /// Initial search term, applied before the first user list arrives.
    pub search: Option<String>,
    /// Posts requested per page.
    pub page_size: u32,
    /// Whether to draw with colors.
    pub color: ColorConfig,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            sort: SortKey::Name,
            search: None,
            page_size: DEFAULT_PAGE_SIZE,
            color: ColorConfig::from_env_and_args(false),
        }
    }
}

impl DashboardOptions {
    /// View state these options describe, before any data is loaded.
    pub fn initial_state(&self) -> ViewState {
        let mut state = ViewState::new(self.sort, self.page_size);
        if let Some(term) = &self.search {
            state.set_search(SearchInput::from_text(term.clone()));
        }
        state
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: ViewState,
    worker: DirectoryWorker,
    key_bindings: KeyBindings,
    styles: DashboardStyles,
    /// Visible post lines at the last draw, for paging
    post_viewport_height: u16,
    /// Post pane text width at the last draw, for wrapping
    post_viewport_width: u16,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(worker: DirectoryWorker, options: DashboardOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(
            terminal,
            options.initial_state(),
            worker,
            KeyBindings::default(),
            DashboardStyles::with_color_config(options.color),
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Waits up to one tick for
    /// input, then drains settled directory responses; redraws only when
    /// something changed.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.start();
        self.draw()?;

        loop {
            let mut dirty = false;

            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            info!("Quit requested");
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        dirty = true;
                    }
                    _ => {}
                }
            }

            if self.poll_worker()? {
                dirty = true;
            }

            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        state: ViewState,
        worker: DirectoryWorker,
        key_bindings: KeyBindings,
        styles: DashboardStyles,
    ) -> Self {
        let (post_viewport_height, post_viewport_width) = match terminal.size() {
            Ok(size) => {
                let frame_area = Rect::new(0, 0, size.width, size.height);
                (
                    layout::post_viewport_height(frame_area),
                    layout::post_viewport_width(frame_area),
                )
            }
            Err(_) => (0, 0),
        };

        Self {
            terminal,
            state,
            worker,
            key_bindings,
            styles,
            post_viewport_height,
            post_viewport_width,
        }
    }

    /// Issue the initial user list load.
    fn start(&mut self) {
        let request = load_users(&mut self.state);
        self.dispatch(request);
    }

    /// Send a request to the worker, settling it locally if the worker is gone.
    fn dispatch(&mut self, request: DirectoryRequest) {
        if let Err(err) = self.worker.submit(request) {
            warn!(error = %err, ?request, "Directory worker unavailable");
            apply_response(
                &mut self.state,
                request.fail(DirectoryError::WorkerUnavailable),
            );
        }
    }

    /// Apply every settled response. Returns true if any arrived.
    fn poll_worker(&mut self) -> Result<bool, TuiError> {
        let responses = self.worker.poll()?;
        let arrived = !responses.is_empty();

        for response in responses {
            let outcome = apply_response(&mut self.state, response);
            debug!(?outcome, "Applied directory response");
        }

        if arrived {
            self.clamp_post_scroll();
        }
        Ok(arrived)
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Help overlay swallows everything except close and quit
        if self.state.help_visible {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.state.help_visible = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        // Typing into the search bar (before key binding dispatch)
        if self.state.focus == FocusPane::Search {
            self.handle_search_key(key);
            return false;
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false, // Unknown key, ignore
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.state.help_visible = true,

            KeyAction::StartSearch => search_input_handler::activate_search_input(&mut self.state),
            KeyAction::ClearSearch => handle_search_edit(&mut self.state, SearchEdit::Clear),
            KeyAction::CycleSort => self.state.cycle_sort_key(),

            KeyAction::Refresh => {
                let request = load_users(&mut self.state);
                self.dispatch(request);
            }
            KeyAction::SelectUser => {
                if let Some(request) = select_highlighted_user(&mut self.state) {
                    self.dispatch(request);
                }
            }
            KeyAction::LoadMorePosts => {
                if let Some(request) = load_more_posts(&mut self.state) {
                    self.dispatch(request);
                }
            }

            KeyAction::CycleFocus => {
                self.state.focus = match self.state.focus {
                    FocusPane::Users => FocusPane::Posts,
                    FocusPane::Posts | FocusPane::Search => FocusPane::Users,
                };
            }

            KeyAction::CursorUp
            | KeyAction::CursorDown
            | KeyAction::CursorTop
            | KeyAction::CursorBottom => {
                if self.state.focus == FocusPane::Posts {
                    self.scroll_posts(action);
                } else {
                    handle_cursor_action(&mut self.state, action);
                }
            }
            KeyAction::ScrollPostsDown | KeyAction::ScrollPostsUp => self.scroll_posts(action),
        }

        false
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let edit = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                SearchEdit::Insert(ch)
            }
            KeyCode::Backspace => SearchEdit::Backspace,
            KeyCode::Left => SearchEdit::CursorLeft,
            KeyCode::Right => SearchEdit::CursorRight,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
                search_input_handler::leave_search_input(&mut self.state);
                return;
            }
            _ => return,
        };
        handle_search_edit(&mut self.state, edit);
    }

    fn scroll_posts(&mut self, action: KeyAction) {
        let max_scroll = self.max_post_scroll();
        handle_post_scroll(&mut self.state, action, self.post_viewport_height, max_scroll);
    }

    fn max_post_scroll(&self) -> u16 {
        let line_count =
            post_pane::build_post_lines(&self.state, &self.styles, self.post_viewport_width)
                .len();
        post_pane::max_post_scroll(line_count, self.post_viewport_height)
    }

    fn clamp_post_scroll(&mut self) {
        self.state.post_scroll = self.state.post_scroll.min(self.max_post_scroll());
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        self.post_viewport_height = layout::post_viewport_height(frame_area);
        self.post_viewport_width = layout::post_viewport_width(frame_area);

        let state = &self.state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing around a caller-built worker.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        state: ViewState,
        worker: DirectoryWorker,
        key_bindings: KeyBindings,
    ) -> Self {
        Self::with_terminal(
            terminal,
            state,
            worker,
            key_bindings,
            DashboardStyles::with_color_config(ColorConfig::fixed(false)),
        )
    }

    pub(crate) fn state(&self) -> &ViewState {
        &self.state
    }

    pub(crate) fn start_test(&mut self) {
        self.start()
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn poll_worker_test(&mut self) -> Result<bool, TuiError> {
        self.poll_worker()
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the dashboard.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, including when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_dashboard(worker: DirectoryWorker, options: DashboardOptions) -> Result<(), TuiError> {
    let mut app = TuiApp::new(worker, options)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

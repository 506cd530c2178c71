//! Acceptance Test Harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend>` with a scripted directory worker: tests see
//! every request the app submits and decide when (and in which order) the
//! responses arrive.

use crate::config::KeyBindings;
use crate::directory::{
    DirectoryError, DirectoryRequest, DirectoryResponse, DirectoryWorker, PostTicket,
};
use crate::model::{Address, Post, PostId, User, UserId};
use crate::state::ViewState;
use crate::view::{DashboardOptions, TuiApp, TuiError};
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::mpsc::{self, Receiver, Sender};

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Ten users shaped like the public directory's data set.
pub fn directory_users() -> Vec<User> {
    [
        (1, "Leanne Graham", "Sincere@april.biz", "Romaguera-Crona", "Gwenborough"),
        (2, "Ervin Howell", "Shanna@melissa.tv", "Deckow-Crist", "Wisokyburgh"),
        (3, "Clementine Bauch", "Nathan@yesenia.net", "Romaguera-Jacobson", "McKenziehaven"),
        (4, "Patricia Lebsack", "Julianne.OConner@kory.org", "Robel-Corkery", "South Elvis"),
        (5, "Chelsey Dietrich", "Lucio_Hettinger@annie.ca", "Keebler LLC", "Roscoeview"),
        (6, "Mrs. Dennis Schulist", "Karley_Dach@jasper.info", "Considine-Lockman", "South Christy"),
        (7, "Kurtis Weissnat", "Telly.Hoeger@billy.biz", "Johns Group", "Howemouth"),
        (8, "Nicholas Runolfsdottir V", "Sherwood@rosamond.me", "Abernathy Group", "Aliyaview"),
        (9, "Glenna Reichert", "Chaim_McDermott@dana.io", "Yost and Sons", "Bartholomebury"),
        (10, "Clementina DuBuque", "Rey.Padberg@karina.biz", "Hoeger LLC", "Lebsackbury"),
    ]
    .into_iter()
    .map(|(id, name, email, company, city)| {
        User::new(
            UserId::new(id),
            name,
            email,
            Address::new("Main St", "Apt. 1", city, "12345"),
            company,
        )
    })
    .collect()
}

/// The page of posts the directory would return for `ticket`.
pub fn posts_page(ticket: PostTicket) -> Vec<Post> {
    let limit = u64::from(ticket.limit);
    let first = u64::from(ticket.page.get() - 1) * limit + 1;
    (first..first + limit)
        .map(|n| {
            Post::new(
                PostId::new(ticket.user_id.get() * 100 + n),
                ticket.user_id,
                format!("post {n} of user {}", ticket.user_id),
                format!("body of post {n}"),
            )
        })
        .collect()
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    requests: Option<Receiver<DirectoryRequest>>,
    responses: Sender<DirectoryResponse>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Started app at 100x30 with default options.
    ///
    /// The initial user list request is pending; answer it with
    /// [`Self::respond_users`].
    pub fn new() -> Self {
        Self::with_options(DashboardOptions::default(), 100, 30)
    }

    /// Started app with custom options and terminal size.
    pub fn with_options(options: DashboardOptions, width: u16, height: u16) -> Self {
        let state = options.initial_state();
        Self::with_state(state, width, height)
    }

    fn with_state(state: ViewState, width: u16, height: u16) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let worker = DirectoryWorker::from_channels(request_tx, response_rx);

        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal");
        let mut app = TuiApp::new_for_test(terminal, state, worker, KeyBindings::default());
        app.start_test();

        Self {
            app,
            requests: Some(request_rx),
            responses: response_tx,
            running: true,
        }
    }

    /// Started app whose initial user list has already loaded.
    pub fn loaded() -> Self {
        let mut harness = Self::new();
        harness.respond_users(directory_users());
        harness
    }

    // ===== Keyboard =====

    /// Send a single key event. Returns true if the app quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C). Returns true if the app quit.
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping if the app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    // ===== Directory =====

    /// Requests submitted since the last call, in order.
    pub fn take_requests(&mut self) -> Vec<DirectoryRequest> {
        match &self.requests {
            Some(requests) => requests.try_iter().collect(),
            None => Vec::new(),
        }
    }

    /// The single post request submitted since the last call.
    pub fn take_post_ticket(&mut self) -> PostTicket {
        let requests = self.take_requests();
        match requests.as_slice() {
            [DirectoryRequest::Posts(ticket)] => *ticket,
            other => panic!("Expected exactly one post request, got {:?}", other),
        }
    }

    /// Deliver a response and let the app apply it.
    pub fn respond(&mut self, response: DirectoryResponse) {
        self.responses
            .send(response)
            .expect("app holds the response receiver");
        self.app
            .poll_worker_test()
            .expect("worker channel stays connected");
    }

    /// Answer the pending user list request.
    pub fn respond_users(&mut self, users: Vec<User>) {
        let requests = self.take_requests();
        assert_eq!(requests, vec![DirectoryRequest::Users]);
        self.respond(DirectoryResponse::Users {
            result: Ok(users),
            received_at: Utc::now(),
        });
    }

    /// Answer `ticket` with the page the directory would serve.
    pub fn respond_posts(&mut self, ticket: PostTicket) {
        self.respond(DirectoryResponse::Posts {
            ticket,
            result: Ok(posts_page(ticket)),
        });
    }

    /// Fail `request` as if the directory returned HTTP 500.
    pub fn fail(&mut self, request: DirectoryRequest) {
        self.respond(request.fail(DirectoryError::Status {
            status: 500,
            url: "http://directory.test/".to_string(),
        }));
    }

    /// Simulate the worker thread exiting: further submits fail.
    pub fn disconnect_worker(&mut self) {
        self.requests = None;
    }

    // ===== Inspection =====

    /// Access view state for assertions
    pub fn state(&self) -> &ViewState {
        self.app.state()
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    pub fn render_to_string(&mut self) -> Result<String, TuiError> {
        self.app.render_test()?;
        Ok(buffer_to_string(self.app.terminal().backend().buffer()))
    }

    /// Names of the users in the visible list, in display order.
    pub fn visible_names(&self) -> Vec<String> {
        self.state()
            .visible_users()
            .iter()
            .map(|user| user.name.clone())
            .collect()
    }

    /// Move the cursor onto the user with `name` and press Enter.
    pub fn select_user_named(&mut self, name: &str) -> PostTicket {
        let index = self
            .state()
            .visible_users()
            .iter()
            .position(|user| user.name == name)
            .unwrap_or_else(|| panic!("{name} is not in the visible list"));

        self.send_key(KeyCode::Char('g'));
        for _ in 0..index {
            self.send_key(KeyCode::Down);
        }
        self.send_key(KeyCode::Enter);
        self.take_post_ticket()
    }
}

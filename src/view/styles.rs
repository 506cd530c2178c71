//! Dashboard styling configuration.
//!
//! One place for every color the dashboard draws with, so `--no-color` and
//! `NO_COLOR` only need to be honoured here.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors explicitly on or off, ignoring the environment.
    pub fn fixed(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== DashboardStyles =====

/// Styles for each dashboard element.
///
/// Without colors, emphasis falls back to modifiers (bold, reversed) so the
/// cursor row and selected user stay distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStyles {
    /// Header summary text.
    pub header: Style,
    /// "Loading..." indicator.
    pub loading: Style,
    /// Error text in the header.
    pub error: Style,
    /// Secondary text: emails, placeholders, hints.
    pub muted: Style,
    /// Key names in hints and the help overlay.
    pub key_hint: Style,
    /// User names in the list.
    pub user_name: Style,
    /// Name of the user whose posts are shown.
    pub selected_user: Style,
    /// Row under the cursor.
    pub cursor_row: Style,
    /// Post titles.
    pub post_title: Style,
    /// Border of the pane with keyboard focus.
    pub focused_border: Style,
    /// Border of the other panes.
    pub unfocused_border: Style,
    /// Block cursor in the search bar.
    pub search_cursor: Style,
}

impl DashboardStyles {
    /// Create styles honouring `--no-color` and `NO_COLOR`.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create styles with specified color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);

        if config.colors_enabled() {
            Self {
                header: Style::default().fg(Color::Cyan),
                loading: Style::default().fg(Color::Yellow),
                error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                muted: Style::default().fg(Color::DarkGray),
                key_hint: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                user_name: bold,
                selected_user: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                cursor_row: Style::default().bg(Color::DarkGray),
                post_title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                focused_border: Style::default().fg(Color::Cyan),
                unfocused_border: Style::default().fg(Color::Gray),
                search_cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                header: Style::default(),
                loading: Style::default(),
                error: bold,
                muted: Style::default().add_modifier(Modifier::DIM),
                key_hint: bold,
                user_name: bold,
                selected_user: bold.add_modifier(Modifier::UNDERLINED),
                cursor_row: Style::default().add_modifier(Modifier::REVERSED),
                post_title: bold,
                focused_border: bold,
                unfocused_border: Style::default(),
                search_cursor: Style::default().add_modifier(Modifier::REVERSED),
            }
        }
    }

    /// Border style for a pane.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.unfocused_border
        }
    }
}

impl Default for DashboardStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====

//! Dashboard layout rendering.
//!
//! Pure layout logic: header, search bar, users (left) and posts (right),
//! status bar, and the help overlay on top when visible.

use crate::state::{FocusPane, ViewState};
use crate::view::constants::{
    HEADER_HEIGHT, SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT, USER_LIST_WIDTH_PERCENT,
};
use crate::view::{help, post_pane, user_list, DashboardStyles, SearchBar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardAreas {
    /// One-line summary at the top.
    pub header: Rect,
    /// Bordered search input.
    pub search: Rect,
    /// User list, left half.
    pub users: Rect,
    /// Post pane, right half.
    pub posts: Rect,
    /// Keyboard hints at the bottom.
    pub status: Rect,
}

/// Split the frame into dashboard regions.
pub fn calculate_areas(frame_area: Rect) -> DashboardAreas {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame_area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(USER_LIST_WIDTH_PERCENT),
            Constraint::Percentage(100 - USER_LIST_WIDTH_PERCENT),
        ])
        .split(vertical_chunks[2]);

    DashboardAreas {
        header: vertical_chunks[0],
        search: vertical_chunks[1],
        users: horizontal_chunks[0],
        posts: horizontal_chunks[1],
        status: vertical_chunks[3],
    }
}

/// Visible lines inside the bordered post pane.
pub fn post_viewport_height(frame_area: Rect) -> u16 {
    calculate_areas(frame_area).posts.height.saturating_sub(2)
}

/// Text columns inside the bordered post pane.
pub fn post_viewport_width(frame_area: Rect) -> u16 {
    calculate_areas(frame_area).posts.width.saturating_sub(2)
}

/// Render the whole dashboard.
pub fn render_layout(frame: &mut Frame, state: &ViewState, styles: &DashboardStyles) {
    let areas = calculate_areas(frame.area());

    frame.render_widget(Paragraph::new(header_line(state, styles)), areas.header);
    frame.render_widget(
        SearchBar::new(state.search(), state.focus == FocusPane::Search, styles),
        areas.search,
    );
    user_list::render_user_list(
        frame,
        areas.users,
        state,
        styles,
        state.focus == FocusPane::Users,
    );
    post_pane::render_post_pane(
        frame,
        areas.posts,
        state,
        styles,
        state.focus == FocusPane::Posts,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            build_keyboard_hints(state.focus),
            styles.muted,
        ))),
        areas.status,
    );

    if state.help_visible {
        help::render_help_overlay(frame, styles);
    }
}

/// Header: user count, sort key, freshness stamp, then loading and error.
///
/// Format: `userdash | 10 users | sort: Name | updated 12:00:00 UTC | Loading... | Failed to load posts`
pub fn header_line(state: &ViewState, styles: &DashboardStyles) -> Line<'static> {
    let mut summary = format!(
        "userdash | {} users | sort: {}",
        state.users().len(),
        state.sort_key().label()
    );
    if let Some(received_at) = state.users_received_at() {
        summary.push_str(&format!(" | updated {}", received_at.format("%H:%M:%S UTC")));
    }

    let mut spans = vec![Span::styled(summary, styles.header)];
    if state.is_loading() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Loading...", styles.loading));
    }
    if let Some(message) = state.error_message() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(message, styles.error));
    }

    Line::from(spans)
}

/// Build keyboard hints for the focused pane.
fn build_keyboard_hints(focus: FocusPane) -> &'static str {
    match focus {
        FocusPane::Search => "type to filter | ←/→ move | Backspace delete | Esc/Enter done",
        FocusPane::Users => {
            "j/k move | Enter posts | / search | s sort | m more | Tab posts | r reload | ? help | q quit"
        }
        FocusPane::Posts => "j/k scroll | Ctrl+d/u page | m more | Tab users | ? help | q quit",
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;

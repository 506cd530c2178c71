//! Post pane: posts of the selected user.

use crate::state::ViewState;
use crate::view::DashboardStyles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Render the post pane into `area`, scrolled by `state.post_scroll`.
pub fn render_post_pane(
    frame: &mut Frame,
    area: Rect,
    state: &ViewState,
    styles: &DashboardStyles,
    focused: bool,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(post_pane_title(state))
        .border_style(styles.border(focused));

    if state.can_load_more() {
        block = block
            .title_bottom(Line::from(Span::styled(" [m] Load More ", styles.key_hint)))
            .title_bottom(
                Line::from(format!(" page {} ", state.page())).alignment(Alignment::Right),
            );
    }

    let inner_width = area.width.saturating_sub(2);
    let paragraph = Paragraph::new(build_post_lines(state, styles, inner_width))
        .block(block)
        .scroll((state.post_scroll, 0));

    frame.render_widget(paragraph, area);
}

/// Pane title: `Posts by {name}` once a user is selected.
pub fn post_pane_title(state: &ViewState) -> String {
    match state.selected_user() {
        Some(user) => format!(" Posts by {} ", user.name),
        None => " Posts ".to_string(),
    }
}

/// Lines drawn in the pane, before scrolling, wrapped to `width` columns.
///
/// Each post is its title, its body lines, and a blank separator. The
/// result has exactly one entry per screen row, so its length bounds the
/// scroll offset.
pub fn build_post_lines(
    state: &ViewState,
    styles: &DashboardStyles,
    width: u16,
) -> Vec<Line<'static>> {
    if state.selected_user_id().is_none() {
        return vec![Line::from(Span::styled(
            "Select a user and press Enter to see their posts",
            styles.muted,
        ))];
    }

    if state.posts().is_empty() {
        let message = if state.is_loading() {
            "Loading posts..."
        } else {
            "No posts"
        };
        return vec![Line::from(Span::styled(message, styles.muted))];
    }

    let width = usize::from(width);
    let mut lines = Vec::new();
    for post in state.posts() {
        lines.extend(
            wrap_to_width(&post.title, width)
                .into_iter()
                .map(|row| Line::from(Span::styled(row, styles.post_title))),
        );
        for body_line in post.body.lines() {
            lines.extend(wrap_to_width(body_line, width).into_iter().map(Line::from));
        }
        lines.push(Line::default());
    }
    lines
}

/// Split `text` into rows of at most `width` display columns.
///
/// Breaks at spaces; a word wider than a whole row is split between
/// characters. A zero width leaves the text as one row.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.width() <= width {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if used > 0 && used + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            used += 1 + word_width;
            continue;
        }
        if used > 0 {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        if word_width <= width {
            current.push_str(word);
            used = word_width;
            continue;
        }
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if used > 0 && used + ch_width > width {
                rows.push(std::mem::take(&mut current));
                used = 0;
            }
            current.push(ch);
            used += ch_width;
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Largest useful scroll offset for a pane with `inner_height` visible lines.
pub fn max_post_scroll(line_count: usize, inner_height: u16) -> u16 {
    let overflow = line_count.saturating_sub(usize::from(inner_height));
    u16::try_from(overflow).unwrap_or(u16::MAX)
}

//! User list pane.
//!
//! Each visible user is a two-line row: name and email, then company and
//! address. The row under the cursor is highlighted; the selected user (whose
//! posts are shown) is drawn in the selected style.

use crate::model::User;
use crate::state::ViewState;
use crate::view::DashboardStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const HIGHLIGHT_SYMBOL: &str = "> ";

/// Render the user list into `area`.
pub fn render_user_list(
    frame: &mut Frame,
    area: Rect,
    state: &ViewState,
    styles: &DashboardStyles,
    focused: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(list_title(state))
        .border_style(styles.border(focused));

    if state.visible_users().is_empty() {
        let message = Paragraph::new(Line::from(Span::styled(empty_message(state), styles.muted)))
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    // Borders take 2 columns; the highlight symbol takes its own width
    let text_width = usize::from(area.width.saturating_sub(2))
        .saturating_sub(HIGHLIGHT_SYMBOL.width());

    let items: Vec<ListItem> = state
        .visible_users()
        .iter()
        .map(|user| user_item(user, state, styles, text_width))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styles.cursor_row)
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut list_state = ListState::default().with_selected(Some(state.cursor()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Pane title: shown count over total, e.g. ` Users (3/10) `.
pub fn list_title(state: &ViewState) -> String {
    format!(
        " Users ({}/{}) ",
        state.visible_users().len(),
        state.users().len()
    )
}

fn empty_message(state: &ViewState) -> String {
    if state.users().is_empty() {
        if state.is_loading() {
            "Loading users...".to_string()
        } else {
            "No users loaded (press r to refresh)".to_string()
        }
    } else {
        format!("No users match '{}'", state.search_term())
    }
}

fn user_item(
    user: &User,
    state: &ViewState,
    styles: &DashboardStyles,
    width: usize,
) -> ListItem<'static> {
    let is_selected = state.selected_user_id() == Some(user.id);
    let name_style = if is_selected {
        styles.selected_user
    } else {
        styles.user_name
    };

    let name = truncate_to_width(&user.name, width);
    let email = truncate_to_width(
        &format!(" <{}>", user.email),
        width.saturating_sub(name.width()),
    );
    let details = truncate_to_width(
        &format!("  {} | {}", user.company_name(), user.address.one_line()),
        width,
    );

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(name, name_style),
            Span::styled(email, styles.muted),
        ]),
        Line::from(Span::raw(details)),
    ])
}

/// Cut `text` to at most `max_width` display columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        // Leave one column for the ellipsis
        if used + ch_width > max_width - 1 {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out
}

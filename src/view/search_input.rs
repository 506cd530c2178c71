//! Search bar widget.

use crate::state::SearchInput;
use crate::view::DashboardStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PLACEHOLDER: &str = "Search by name or email (press /)";

/// Search bar widget.
///
/// While focused it draws the term with a block cursor. Unfocused, it shows
/// the term as plain text, or a placeholder when empty.
pub struct SearchBar<'a> {
    input: &'a SearchInput,
    focused: bool,
    styles: &'a DashboardStyles,
}

impl<'a> SearchBar<'a> {
    /// Bar over `input`; `focused` draws the editing cursor.
    pub fn new(input: &'a SearchInput, focused: bool, styles: &'a DashboardStyles) -> Self {
        Self {
            input,
            focused,
            styles,
        }
    }

    fn content(&self) -> Line<'static> {
        let text = self.input.text();

        if !self.focused {
            if text.is_empty() {
                return Line::from(Span::styled(PLACEHOLDER, self.styles.muted));
            }
            return Line::from(text.to_string());
        }

        // Split around the cursor so the character under it can be highlighted
        let before: String = text.chars().take(self.input.cursor()).collect();
        let mut rest = text.chars().skip(self.input.cursor());
        let under = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = rest.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(under, self.styles.search_cursor),
            Span::raw(after),
        ])
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.focused {
            " Search (Esc/Enter to leave) "
        } else {
            " Search "
        };

        let paragraph = Paragraph::new(self.content()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(self.styles.border(self.focused)),
        );

        paragraph.render(area, buf);
    }
}

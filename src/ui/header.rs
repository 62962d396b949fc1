use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::store::NotesState;
use crate::ui::theme::{parse_hex_color, Palette, ACCENT};

pub struct Header<'a> {
    state: &'a NotesState,
    palette: Palette,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a NotesState, palette: Palette) -> Self {
        Self { state, palette }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(self.palette.text);
        let separator_style = Style::default().fg(self.palette.muted);

        let (folder_name, folder_color) = match self.state.active_folder() {
            Some(folder) => (
                folder.name.clone(),
                parse_hex_color(&folder.color).unwrap_or(self.palette.text),
            ),
            None => ("All Notes".to_string(), self.palette.text),
        };

        let search = if self.state.search_query.is_empty() {
            Span::styled("no filter", separator_style)
        } else {
            Span::styled(format!("\"{}\"", self.state.search_query), text_style)
        };

        let theme = if self.state.dark_mode { "☾ dark" } else { "☀ light" };

        let line = Line::from(vec![
            Span::styled(
                "  VibeNotes",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("■ ", Style::default().fg(folder_color)),
            Span::styled(folder_name, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("search: ", separator_style),
            search,
            Span::styled("  │  ", separator_style),
            Span::styled(self.state.view_mode.label(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(theme, text_style),
        ]);

        Paragraph::new(line)
            .style(Style::default().bg(self.palette.panel))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(self.palette.border)),
            )
    }
}

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{Palette, DANGER};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str = " ^N New │ ^F Folder │ ^D Delete │ ^O Move │ ^K Search │ ^V View │ ^T Theme │ ^E Export │ Tab Focus │ ^Q Quit";

pub struct Footer<'a> {
    palette: Palette,
    status: Option<&'a str>,
    is_error: bool,
}

impl<'a> Footer<'a> {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            status: None,
            is_error: false,
        }
    }

    /// Replace the key hints with a transient message.
    pub fn status(mut self, message: &'a str, is_error: bool) -> Self {
        self.status = Some(message);
        self.is_error = is_error;
        self
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = match self.status {
            Some(message) => format!(" {}", message),
            None => HINTS.to_string(),
        };
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let dim = Style::default()
            .fg(self.palette.muted)
            .add_modifier(Modifier::DIM);
        let hint_style = match (self.status, self.is_error) {
            (Some(_), true) => Style::default().fg(DANGER),
            (Some(_), false) => Style::default().fg(self.palette.text),
            (None, _) => dim,
        };

        let line = Line::from(vec![
            Span::styled(hints, hint_style),
            Span::styled(" ".repeat(padding), dim),
            Span::styled(version, dim),
        ]);

        Paragraph::new(line)
            .style(Style::default().bg(self.palette.panel))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.border)),
            )
    }
}

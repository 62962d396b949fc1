use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::dialog::state::{DeleteTarget, DialogState, NamePurpose};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{Palette, ACCENT, DANGER};

const MIN_WIDTH: u16 = 44;

/// Draw the open dialog centered over `area`. Text prompts also place the
/// terminal cursor at the end of their input.
pub fn render_dialog(frame: &mut Frame<'_>, area: Rect, state: &DialogState, palette: &Palette) {
    let text = Style::default().fg(palette.text);
    let muted = Style::default().fg(palette.muted);

    let (title, lines, input_row) = match state {
        DialogState::Hidden => return,
        DialogState::ConfirmDelete { target, label } => {
            let (title, detail) = match target {
                DeleteTarget::Note { .. } => ("Delete Note", "This cannot be undone."),
                DeleteTarget::Folder { .. } => (
                    "Delete Folder",
                    "Its notes will become uncategorized.",
                ),
            };
            let lines = vec![
                Line::from(vec![
                    Span::styled("Delete ", text),
                    Span::styled(
                        format!("\"{}\"", label),
                        text.add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("?", text),
                ]),
                Line::from(Span::styled(detail, muted)),
                Line::from(""),
                Line::from(Span::styled("y/Enter: Delete  n/Esc: Cancel", muted)),
            ];
            (title, lines, None)
        }
        DialogState::NameInput {
            purpose,
            input,
            error,
        } => {
            let title = match purpose {
                NamePurpose::NewFolder => "New Folder",
                NamePurpose::RenameFolder { .. } => "Rename Folder",
            };
            let mut lines = vec![
                Line::from(Span::styled("Name:", muted)),
                Line::from(Span::styled(format!("> {}", input), text)),
            ];
            if let Some(error) = error {
                lines.push(Line::from(Span::styled(
                    error.clone(),
                    Style::default().fg(DANGER),
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Enter: Save  Esc: Cancel", muted)));
            (title, lines, Some((1, 2 + Span::raw(input.as_str()).width())))
        }
        DialogState::FolderPicker { options, selected } => {
            let mut lines: Vec<Line> = options
                .iter()
                .enumerate()
                .map(|(idx, option)| {
                    if idx == *selected {
                        Line::from(Span::styled(
                            format!("▶ {}", option.name),
                            Style::default()
                                .fg(ACCENT)
                                .bg(palette.highlight)
                                .add_modifier(Modifier::BOLD),
                        ))
                    } else {
                        Line::from(Span::styled(format!("  {}", option.name), text))
                    }
                })
                .collect();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Up/Down: Move  Enter: Select  Esc: Close",
                muted,
            )));
            ("Move to Folder", lines, None)
        }
        DialogState::Search { input } => {
            let lines = vec![
                Line::from(Span::styled(format!("/ {}", input), text)),
                Line::from(""),
                Line::from(Span::styled(
                    "Matches titles and content  Enter/Esc: Close  ^U: Clear",
                    muted,
                )),
            ];
            ("Search", lines, Some((0, 2 + Span::raw(input.as_str()).width())))
        }
    };

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4).max(MIN_WIDTH);
    let popup_height = lines.len().saturating_add(2) as u16;
    let popup_area = centered_rect_by_size(area, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.focus_border))
        .style(Style::default().bg(palette.panel));
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);

    if let Some((row, col)) = input_row {
        let inner_right = popup_area.x + popup_area.width.saturating_sub(2);
        let x = (popup_area.x + 1)
            .saturating_add(col.min(u16::MAX as usize) as u16)
            .min(inner_right);
        let y = popup_area.y + 1 + row as u16;
        frame.set_cursor_position(Position::new(x, y));
    }
}

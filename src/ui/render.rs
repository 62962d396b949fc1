use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::store::NotesState;
use crate::ui::app::{App, Draft, Focus};
use crate::ui::dialog::render_dialog;
use crate::ui::editor::TextBuffer;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_columns, editor_panes, layout_regions, sidebar_sections};
use crate::ui::preview::render_markdown;
use crate::ui::theme::{parse_hex_color, Palette, ACCENT, SUCCESS};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.state();
    let palette = Palette::for_mode(state.dark_mode);
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );
    frame.render_widget(Header::new(state, palette).widget(), header);

    let (sidebar, main) = body_columns(body);
    let (folders_area, notes_area) = sidebar_sections(sidebar, state.folders.len() + 1);
    draw_folders(frame, app, &palette, folders_area);
    draw_notes(frame, app, &palette, notes_area);
    draw_editor(frame, app, &palette, main);

    let footer_widget = match app.status() {
        Some((message, is_error)) => Footer::new(palette).status(message, is_error),
        None => Footer::new(palette),
    };
    frame.render_widget(footer_widget.widget(footer), footer);

    render_dialog(frame, body, app.dialog(), &palette);
}

fn panel_block<'a>(title: &'a str, focused: bool, palette: &Palette) -> Block<'a> {
    let border = if focused {
        palette.focus_border
    } else {
        palette.border
    };
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(palette.muted).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(palette.panel))
}

fn draw_folders(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let state = app.state();
    let focused = app.focus() == Focus::Folders;

    let mut rows = vec![(
        "All Notes".to_string(),
        palette.text,
        state.notes.len(),
        state.active_folder_id.is_none(),
    )];
    rows.extend(state.folders.iter().map(|folder| {
        (
            folder.name.clone(),
            parse_hex_color(&folder.color).unwrap_or(palette.text),
            state.folder_note_count(Some(&folder.id)),
            state.active_folder_id.as_deref() == Some(folder.id.as_str()),
        )
    }));

    let inner_width = area.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = rows
        .into_iter()
        .enumerate()
        .map(|(idx, (name, color, count, active))| {
            let count = count.to_string();
            let name_width = inner_width.saturating_sub(count.len() + 4);
            let name = truncate(&name, name_width);
            let padding = name_width.saturating_sub(name.chars().count());

            let mut name_style = Style::default().fg(palette.text);
            if active {
                name_style = name_style.fg(ACCENT).add_modifier(Modifier::BOLD);
            }
            let mut line = Line::from(vec![
                Span::styled(" ■ ", Style::default().fg(color)),
                Span::styled(name, name_style),
                Span::raw(" ".repeat(padding)),
                Span::styled(format!("{} ", count), Style::default().fg(palette.muted)),
            ]);
            if focused && idx == app.folder_cursor() {
                line = line.style(Style::default().bg(palette.highlight));
            }
            line
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(panel_block(" Folders ", focused, palette))
        .scroll((scroll_offset(app.folder_cursor(), area.height), 0));
    frame.render_widget(widget, area);
}

fn draw_notes(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let state = app.state();
    let notes = state.filtered_notes();
    let focused = app.focus() == Focus::Notes;
    let inner_width = area.width.saturating_sub(2) as usize;

    let mut lines = Vec::new();
    if notes.is_empty() {
        let message = if state.search_query.is_empty() {
            "No notes yet. ^N creates one."
        } else {
            "No notes match the search."
        };
        lines.push(Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(palette.muted),
        )));
    }

    for (idx, note) in notes.iter().enumerate() {
        let active = state.active_note_id.as_deref() == Some(note.id.as_str());
        let selected = focused && idx == app.note_cursor();
        let date = note.updated_at.format("%b %-d").to_string();
        let title_width = inner_width.saturating_sub(date.chars().count() + 3);
        let title = truncate(&note.title, title_width);
        let padding = title_width.saturating_sub(title.chars().count());

        let mut title_style = Style::default().fg(palette.text);
        if active {
            title_style = title_style.fg(ACCENT).add_modifier(Modifier::BOLD);
        }
        let mut title_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(title, title_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(format!(" {} ", date), Style::default().fg(palette.muted)),
        ]);
        let mut snippet_line = Line::from(vec![
            Span::raw(" "),
            folder_swatch(state, note.folder_id.as_deref(), palette),
            Span::styled(
                truncate(&snippet(&note.content), inner_width.saturating_sub(4)),
                Style::default().fg(palette.muted),
            ),
        ]);
        if selected {
            title_line = title_line.style(Style::default().bg(palette.highlight));
            snippet_line = snippet_line.style(Style::default().bg(palette.highlight));
        }
        lines.push(title_line);
        lines.push(snippet_line);
    }

    let title = format!(" Notes ({}) ", notes.len());
    let widget = Paragraph::new(lines)
        .block(panel_block(&title, focused, palette))
        .scroll((scroll_offset(app.note_cursor() * 2 + 1, area.height), 0));
    frame.render_widget(widget, area);
}

fn draw_editor(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let state = app.state();
    let Some(draft) = app.draft() else {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Select a note or press ^N to create one.",
                Style::default().fg(palette.muted),
            )),
        ])
        .block(panel_block(" Editor ", false, palette));
        frame.render_widget(empty, area);
        return;
    };

    let (title_area, editor_area, preview_area) = editor_panes(area, state.view_mode);
    draw_title(frame, app, draft, palette, title_area);

    if let Some(editor_area) = editor_area {
        let focused = app.focus() == Focus::Content;
        let lines: Vec<Line> = draft
            .content
            .lines()
            .iter()
            .map(|line| Line::from(Span::styled(line.clone(), Style::default().fg(palette.text))))
            .collect();
        let scroll = (
            scroll_offset(draft.content.cursor().0, editor_area.height),
            scroll_offset(cursor_column(&draft.content), editor_area.width),
        );
        let widget = Paragraph::new(lines)
            .block(panel_block(" Markdown ", focused, palette))
            .scroll(scroll);
        frame.render_widget(widget, editor_area);
        if focused && !app.dialog().is_visible() {
            place_cursor(frame, &draft.content, editor_area, scroll);
        }
    }

    if let Some(preview_area) = preview_area {
        let widget = Paragraph::new(render_markdown(&draft.content.text(), palette))
            .block(panel_block(" Preview ", false, palette))
            .wrap(Wrap { trim: false });
        frame.render_widget(widget, preview_area);
    }
}

fn draw_title(frame: &mut Frame<'_>, app: &App, draft: &Draft, palette: &Palette, area: Rect) {
    let state = app.state();
    let focused = app.focus() == Focus::Title;

    let updated = state
        .note(&draft.note_id)
        .map(|note| note.updated_at.format("%b %-d, %Y %H:%M").to_string())
        .unwrap_or_default();
    let save_marker = if app.has_unsaved_changes() {
        Span::styled("  ● editing", Style::default().fg(palette.muted))
    } else {
        Span::styled("  ✓ saved", Style::default().fg(SUCCESS))
    };

    let block = panel_block(" Title ", focused, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let scroll = (0, scroll_offset(cursor_column(&draft.title), area.width));
    let title = Paragraph::new(Line::from(Span::styled(
        draft.title.text(),
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
    )))
    .scroll(scroll);
    frame.render_widget(title, Rect { height: inner.height.min(1), ..inner });

    let meta = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Last updated {}", updated),
            Style::default().fg(palette.muted),
        ),
        save_marker,
    ]));
    if inner.height > 1 {
        frame.render_widget(
            meta,
            Rect {
                y: inner.y + 1,
                height: inner.height - 1,
                ..inner
            },
        );
    }
    if focused && !app.dialog().is_visible() {
        place_cursor(frame, &draft.title, area, scroll);
    }
}

fn folder_swatch(state: &NotesState, folder_id: Option<&str>, palette: &Palette) -> Span<'static> {
    match folder_id.and_then(|id| state.folder(id)) {
        Some(folder) => Span::styled(
            "■ ",
            Style::default().fg(parse_hex_color(&folder.color).unwrap_or(palette.muted)),
        ),
        None => Span::styled("□ ", Style::default().fg(palette.muted)),
    }
}

/// First non-empty content line with heading markers stripped.
fn snippet(content: &str) -> String {
    content
        .lines()
        .map(|line| line.trim_start_matches('#').trim())
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Offset that keeps `pos` inside a bordered pane spanning `extent` cells.
/// Works for rows (height) and display columns (width).
fn scroll_offset(pos: usize, extent: u16) -> u16 {
    let visible = extent.saturating_sub(2) as usize;
    if visible == 0 {
        return 0;
    }
    pos.saturating_sub(visible - 1) as u16
}

/// Display width of the text left of the cursor on its row.
fn cursor_column(buffer: &TextBuffer) -> usize {
    let (row, col) = buffer.cursor();
    buffer
        .lines()
        .get(row)
        .map(|line| Span::raw(line.chars().take(col).collect::<String>()).width())
        .unwrap_or(0)
}

fn place_cursor(frame: &mut Frame<'_>, buffer: &TextBuffer, area: Rect, scroll: (u16, u16)) {
    if area.width < 3 || area.height < 3 {
        return;
    }
    let row = buffer.cursor().0.saturating_sub(scroll.0 as usize);
    let col = cursor_column(buffer).saturating_sub(scroll.1 as usize);
    let x = (area.x + 1)
        .saturating_add(col.min(u16::MAX as usize) as u16)
        .min(area.x + area.width - 2);
    let y = (area.y + 1)
        .saturating_add(row.min(u16::MAX as usize) as u16)
        .min(area.y + area.height - 2);
    frame.set_cursor_position(Position::new(x, y));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_skips_heading_markers_and_blank_lines() {
        assert_eq!(snippet("# New Note\n\nStart writing..."), "New Note");
        assert_eq!(snippet("\n\n## \nbody"), "body");
        assert_eq!(snippet(""), "");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("Meeting notes", 7), "Meetin…");
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn scroll_keeps_cursor_visible() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(7, 10), 0);
        assert_eq!(scroll_offset(12, 10), 5);
        assert_eq!(scroll_offset(3, 2), 0);
    }

    #[test]
    fn cursor_column_counts_display_cells() {
        let mut buffer = TextBuffer::single_line("日本語");
        assert_eq!(cursor_column(&buffer), 6);
        buffer.insert_char('x');
        assert_eq!(cursor_column(&buffer), 7);
        assert_eq!(cursor_column(&TextBuffer::multi_line("abc\n")), 0);
    }
}

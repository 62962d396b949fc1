use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::model::ViewMode;

const SIDEBAR_WIDTH: u16 = 34;

/// Header, body and footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into sidebar and editor columns.
pub fn body_columns(body: Rect) -> (Rect, Rect) {
    let sidebar_width = SIDEBAR_WIDTH.min(body.width / 2);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(body);
    (columns[0], columns[1])
}

/// Split the sidebar into the folder list (sized to fit) and the note list.
pub fn sidebar_sections(sidebar: Rect, folder_rows: usize) -> (Rect, Rect) {
    let wanted = (folder_rows as u16).saturating_add(2);
    let folders_height = wanted.min(sidebar.height / 2).max(3.min(sidebar.height));
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(folders_height), Constraint::Min(0)])
        .split(sidebar);
    (sections[0], sections[1])
}

/// Title block plus the editor/preview panes the view mode asks for.
pub fn editor_panes(area: Rect, mode: ViewMode) -> (Rect, Option<Rect>, Option<Rect>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);
    let (title, panes) = (rows[0], rows[1]);

    match mode {
        ViewMode::Edit => (title, Some(panes), None),
        ViewMode::Preview => (title, None, Some(panes)),
        ViewMode::Split => {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(panes);
            (title, Some(halves[0]), Some(halves[1]))
        }
    }
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

mod common;

use std::time::Duration;

use common::Harness;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::Terminal;
use tempfile::TempDir;
use vibenotes::model::ViewMode;
use vibenotes::ui::app::{App, Focus};
use vibenotes::ui::input::handle_key;
use vibenotes::ui::render::draw;

fn app() -> (App, TempDir) {
    let h = Harness::new();
    let export_dir = TempDir::new().unwrap();
    let app = App::new(h.store, Duration::from_millis(500), export_dir.path().to_path_buf());
    (app, export_dir)
}

fn ctrl(app: &mut App, ch: char) {
    handle_key(app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn render(app: &App) -> (Buffer, Position) {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let cursor = terminal.get_cursor_position().unwrap();
    (terminal.backend().buffer().clone(), cursor)
}

fn symbol_at(buffer: &Buffer, x: u16, y: u16) -> String {
    buffer[(x, y)].symbol().to_string()
}

#[test]
fn long_content_lines_scroll_to_keep_the_cursor_visible() {
    let (mut app, _dir) = app();
    ctrl(&mut app, 'n');
    ctrl(&mut app, 'v');
    ctrl(&mut app, 'v');
    assert_eq!(app.state().view_mode, ViewMode::Edit);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Content);

    type_text(&mut app, &"a".repeat(200));
    type_text(&mut app, "ZQ");
    let (buffer, cursor) = render(&app);

    assert_eq!(symbol_at(&buffer, cursor.x - 1, cursor.y), "Q");
    assert_eq!(symbol_at(&buffer, cursor.x - 2, cursor.y), "Z");
}

#[test]
fn title_cursor_follows_wide_characters() {
    let (mut app, _dir) = app();
    ctrl(&mut app, 'n');
    assert_eq!(app.focus(), Focus::Title);

    type_text(&mut app, "日本");
    let (buffer, cursor) = render(&app);

    assert_eq!(symbol_at(&buffer, cursor.x - 2, cursor.y), "本");
    assert_eq!(symbol_at(&buffer, cursor.x - 4, cursor.y), "日");
}

#[test]
fn dialog_cursor_follows_wide_characters() {
    let (mut app, _dir) = app();
    ctrl(&mut app, 'f');
    assert!(app.dialog().is_visible());

    type_text(&mut app, "日本");
    let (buffer, cursor) = render(&app);

    assert_eq!(symbol_at(&buffer, cursor.x - 2, cursor.y), "本");
}

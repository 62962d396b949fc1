use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, EditOp, Focus};
use crate::ui::dialog::{DialogIntent, DialogState};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.dialog().is_visible() {
        handle_dialog_key(app, key);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(ch) = key.code {
            match ch.to_ascii_lowercase() {
                'n' => app.new_note(),
                'f' => app.ask_new_folder(),
                'd' => app.ask_delete_note(),
                'x' => app.ask_delete_folder(),
                'r' => app.ask_rename_folder(),
                'o' => app.ask_move_note(),
                'k' => app.open_search(),
                'v' => app.cycle_view_mode(),
                't' => app.toggle_dark_mode(),
                'e' => app.export_active_note(),
                's' => app.save_now(),
                _ => {}
            }
        }
        return;
    }

    match key.code {
        KeyCode::Tab => return app.focus_next(),
        KeyCode::BackTab => return app.focus_prev(),
        _ => {}
    }

    match app.focus() {
        Focus::Folders | Focus::Notes => handle_list_key(app, key),
        Focus::Title => handle_title_key(app, key),
        Focus::Content => handle_content_key(app, key),
    }
}

/// Bracketed paste goes to the focused editor or the open text prompt.
pub fn handle_paste(app: &mut App, text: &str) {
    match app.dialog() {
        DialogState::NameInput { .. } | DialogState::Search { .. } => {
            for ch in text.chars().filter(|ch| !ch.is_control()) {
                app.dialog_input(DialogIntent::InsertChar(ch));
            }
        }
        DialogState::Hidden => app.edit(EditOp::Paste(text.to_string())),
        DialogState::ConfirmDelete { .. } | DialogState::FolderPicker { .. } => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => return app.cancel_dialog(),
        KeyCode::Enter => return app.confirm_dialog(),
        _ => {}
    }

    match app.dialog() {
        DialogState::ConfirmDelete { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_dialog(),
            KeyCode::Char('n') | KeyCode::Char('N') => app.cancel_dialog(),
            _ => {}
        },
        DialogState::FolderPicker { .. } => match key.code {
            KeyCode::Up => app.dialog_input(DialogIntent::MoveUp),
            KeyCode::Down => app.dialog_input(DialogIntent::MoveDown),
            _ => {}
        },
        DialogState::NameInput { .. } | DialogState::Search { .. } => {
            if is_ctrl_char(key, 'u') {
                app.dialog_input(DialogIntent::ClearInput);
                return;
            }
            match key.code {
                KeyCode::Backspace => app.dialog_input(DialogIntent::Backspace),
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.dialog_input(DialogIntent::InsertChar(ch))
                }
                _ => {}
            }
        }
        DialogState::Hidden => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Enter => app.activate(),
        KeyCode::Char('/') => app.open_search(),
        KeyCode::Left => app.set_focus(Focus::Folders),
        KeyCode::Right => app.set_focus(Focus::Notes),
        _ => {}
    }
}

fn handle_title_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.set_focus(Focus::Notes),
        KeyCode::Enter | KeyCode::Down => app.set_focus(Focus::Content),
        _ => {
            if let Some(op) = edit_op(key) {
                app.edit(op);
            }
        }
    }
}

fn handle_content_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.set_focus(Focus::Notes),
        KeyCode::Enter => app.edit(EditOp::Newline),
        _ => {
            if let Some(op) = edit_op(key) {
                app.edit(op);
            }
        }
    }
}

fn edit_op(key: KeyEvent) -> Option<EditOp> {
    let op = match key.code {
        KeyCode::Char(ch) => EditOp::Insert(ch),
        KeyCode::Backspace => EditOp::Backspace,
        KeyCode::Delete => EditOp::Delete,
        KeyCode::Left => EditOp::Left,
        KeyCode::Right => EditOp::Right,
        KeyCode::Up => EditOp::Up,
        KeyCode::Down => EditOp::Down,
        KeyCode::Home => EditOp::Home,
        KeyCode::End => EditOp::End,
        _ => return None,
    };
    Some(op)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

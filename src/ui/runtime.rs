use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

use scopeguard::ScopeGuard;

use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Hold `app` so a pending draft reaches the store on every way out of the
/// event loop, unwinding included.
pub fn flush_on_exit(app: App) -> ScopeGuard<App, impl FnOnce(App)> {
    scopeguard::guard(app, |mut app| app.flush_autosave())
}

pub fn run(app: App, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = flush_on_exit(app);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, &text),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                app.request_quit();
                break;
            }
        }
        if app.needs_sync() {
            app.on_tick(Instant::now());
        }
    }

    drop(app);
    drop(guard);
    Ok(())
}

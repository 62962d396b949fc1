use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "VIBENOTES_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is off unless `VIBENOTES_LOG` names a file path, since the TUI
/// owns the terminal. The file name gets a `.{timestamp}.{pid}` suffix so
/// concurrent instances never share a log.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var(LOG_ENV) else {
        return;
    };

    let unique_path = format!(
        "{}.{}.{}",
        log_path,
        chrono::Utc::now().timestamp(),
        std::process::id()
    );

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

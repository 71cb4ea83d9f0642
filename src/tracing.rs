//! Diagnostic logging for the editor
//!
//! stdout belongs to the editing session: printed lines, error messages for
//! rejected commands and the farewell. Diagnostics never go there. They go
//! to stderr and to a log file.
//!
//! What gets logged:
//! - `debug`: each dispatched command with its arguments, rejected commands,
//!   lines ignored in command mode
//! - `info`: the config file that was loaded, buffers read by `r` and saved
//!   by `w`, how the session ended
//! - `warn`: quitting with unsaved changes, unreadable or invalid config
//!   files, failed swap-file cleanup
//!
//! Console output is filtered by `RUST_LOG` and defaults to `warn`, so a
//! clean session prints nothing on stderr:
//! - `RUST_LOG=lined=debug` - trace every command
//! - `RUST_LOG=lined::util=debug` - only file reads and writes
//!
//! # Log Files
//!
//! `~/.config/lined/logs/lined.log`, rotated daily, always at `debug`. When
//! the logs directory cannot be created the editor runs with console logging
//! only.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "lined.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

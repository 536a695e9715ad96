// crates/gifcount-ui/src/helpers/log.rs
//
// Logging setup for the binary.
//
// In release builds with `windows_subsystem = "windows"` (double-click launch),
// there is no console attached, so stderr output is silently discarded.
// Every event is therefore also appended to a file in the OS temp directory.
//
// File: %TEMP%\gifcount.log (or $TMPDIR/gifcount.log), append-only.
// Level: RUST_LOG if set, otherwise `info`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("gifcount.log")
}

/// Install the global subscriber. Never panics — if the log file cannot be
/// opened, logging continues on stderr only.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path())
        .ok()
        .map(|f| fmt::layer().with_ansi(false).with_writer(Mutex::new(f)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init();
}

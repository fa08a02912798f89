//! Logging Setup
//!
//! Library code logs through the `log` macros. The binary installs a
//! `tracing` registry that writes daily-rolling JSON files under the user's
//! data directory and, outside the TUI, pretty output on stderr. `log`
//! records are bridged into `tracing`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "campusbot.log";

/// Directory rolled log files are written to.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("campusbot").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

fn prepare_log_dir() -> PathBuf {
    let log_dir = log_dir();
    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }
    log_dir
}

/// `RUST_LOG` wins over the configured level.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize logging for one-shot mode: JSON file plus pretty stderr.
/// Stdout carries only the answer.
///
/// Returns a `WorkerGuard` which must be kept alive for the duration of the
/// application so buffered logs are flushed on shutdown.
pub fn init(level: &str) -> WorkerGuard {
    let log_dir = prepare_log_dir();

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let filter = env_filter(level);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(filter.clone());

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(console_writer)
        .pretty()
        .with_filter(filter);

    let _ = tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init();

    finish_init(log_dir);
    guard
}

/// Console records never share stdout with answers.
fn console_writer() -> io::Stderr {
    io::stderr()
}

/// Initialize logging for TUI mode.
///
/// Same as [`init()`] without the console layer; ratatui owns the terminal
/// while in raw/alternate-screen mode.
pub fn init_tui(level: &str) -> WorkerGuard {
    let log_dir = prepare_log_dir();

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter(level));

    let _ = tracing_subscriber::registry().with(file_layer).try_init();

    finish_init(log_dir);
    guard
}

fn finish_init(log_dir: PathBuf) {
    // The subscriber may already have installed the bridge.
    if let Err(e) = tracing_log::LogTracer::init() {
        tracing::debug!("LogTracer not installed: {}", e);
    }

    let target = log_dir.join(LOG_FILE_PREFIX);
    std::thread::spawn(move || compress_old_logs(&log_dir));

    log::info!("Logging initialized. Writing to: {:?} (daily rolling)", target);
}

/// Whether a file in the log directory is a finished roll awaiting gzip.
fn should_compress(name: &str, today_suffix: &str) -> bool {
    name.starts_with(LOG_FILE_PREFIX)
        && name.len() > LOG_FILE_PREFIX.len()
        && !name.ends_with(today_suffix)
        && !name.ends_with(".gz")
}

fn compress_old_logs(log_dir: &Path) {
    let today_suffix = chrono::Local::now().format("%Y-%m-%d").to_string();

    let Ok(entries) = fs::read_dir(log_dir) else {
        return;
    };

    for path in entries.flatten().map(|e| e.path()) {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !should_compress(name, &today_suffix) {
            continue;
        }
        match compress_file(&path) {
            Ok(()) => log::info!("Compressed old log: {:?}", path),
            Err(e) => log::warn!("Failed to compress old log {:?}: {}", path, e),
        }
    }
}

fn compress_file(path: &Path) -> io::Result<()> {
    let mut gz_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No filename"))?
        .to_os_string();
    gz_name.push(".gz");
    let gz_path = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?
        .join(gz_name);

    if gz_path.exists() {
        return Ok(());
    }

    let mut reader = io::BufReader::new(fs::File::open(path)?);
    let mut encoder = GzEncoder::new(fs::File::create(&gz_path)?, Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)
}

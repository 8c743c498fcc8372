// src/logging.rs
//
// Backends for the `log` facade: colored console, or an append-only file with
// elapsed-time stamps. Plus raw page dumps for debugging markup drift.

use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::core::sanitize::sanitize_filename;

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

struct FileLogger {
    path: PathBuf,
    level: LevelFilter,
    lock: Mutex<()>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        let line = format!("[{elapsed}][{}] {}\n", record.level(), record.args());

        if let Ok(_guard) = self.lock.lock() {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

/// Colored console logging on stderr.
pub fn init_console(level: LevelFilter) -> Result<(), SetLoggerError> {
    let mut clog = colog::default_builder();
    clog.filter(None, level);
    clog.try_init()
}

/// Append log lines to `path` (parent directories are created).
/// Fails up front if the file cannot be opened for appending.
pub fn init_file(path: &Path, level: LevelFilter) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Cannot create log directory {}: {}", parent.display(), e))?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Cannot open log file {}: {}", path.display(), e))?;
    start();
    let logger = FileLogger { path: path.to_path_buf(), level, lock: Mutex::new(()) };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}

/// Write a fetched page to `<dir>/<unix-millis>.<url-stem>.html`. Best-effort.
pub fn dump_page(dir: &Path, url: &str, body: &str) {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let path = dir.join(format!("{}.{}.html", millis, sanitize_filename(url, "page")));

    let result = fs::create_dir_all(dir).and_then(|()| {
        let mut file = fs::File::create(&path)?;
        file.write_all(b"<!-- SAMPLE PAGE CONTENT -->\n")?;
        file.write_all(body.as_bytes())
    });
    match result {
        Ok(()) => log::debug!("dumped {} -> {}", url, path.display()),
        Err(e) => log::warn!("could not dump {}: {}", url, e),
    }
}

// src/config/options.rs
use std::path::PathBuf;

use log::LevelFilter;

use crate::direction::Direction;
use crate::specs::row::RowLayout;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub net: NetOptions,
    pub export: ExportOptions,
    pub log: LogOptions,
}

/// How a search hit is chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MatchMode {
    /// Trust the first listed result.
    First,
    /// Best Jaro-Winkler score at or above the threshold.
    Similarity(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrapeOptions {
    pub base_url: String,
    /// Directions to collect, in output order.
    pub directions: Vec<Direction>,
    pub page_threshold: usize,
    pub matching: MatchMode,
    pub layout: RowLayout,
    /// Write every fetched page here when set.
    pub dump_dir: Option<PathBuf>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            directions: Direction::ALL.to_vec(),
            page_threshold: PAGE_THRESHOLD,
            matching: MatchMode::First,
            layout: RowLayout::DEFAULT,
            dump_dir: None,
        }
    }
}

impl ScrapeOptions {
    /// Base URL without trailing '/'.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    pub user_agent: String,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    pub retries: u32,
    pub backoff_ms: u64,
    pub pause_ms: u64,
    pub jitter_ms: u64,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            connect_timeout_secs: CONNECT_TIMEOUT_SECS,
            read_timeout_secs: READ_TIMEOUT_SECS,
            retries: MAX_RETRIES,
            backoff_ms: RETRY_BACKOFF_MS,
            pause_ms: REQUEST_PAUSE_MS,
            jitter_ms: JITTER_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    /// Guess from a file extension; anything but `.tsv` is CSV.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => ExportFormat::Tsv,
            _ => ExportFormat::Csv,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// None → stdout
    pub out: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { format: ExportFormat::Csv, include_headers: true, out: None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogOptions {
    pub level: LevelFilter,
    /// None → console
    pub file: Option<PathBuf>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self { level: LevelFilter::Info, file: None }
    }
}

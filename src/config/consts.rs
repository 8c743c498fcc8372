// src/config/consts.rs

// Site
pub const BASE_URL: &str = "https://www.whosampled.com";
pub const SEARCH_PATH: &str = "/search/tracks/";

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/72.0.3626.119 Safari/537.36";
pub const CONNECT_TIMEOUT_SECS: u64 = 10;
pub const READ_TIMEOUT_SECS: u64 = 20;
pub const MAX_RETRIES: u32 = 10;
pub const RETRY_BACKOFF_MS: u64 = 500;

// Politeness
pub const REQUEST_PAUSE_MS: u64 = 750;
pub const JITTER_MS: u64 = 250; // extra 0..250 ms

// Scrape
pub const PAGE_THRESHOLD: usize = 5; // summary rows at which the paged view is walked
pub const SIMILARITY_THRESHOLD: f64 = 0.85;

// Logging
pub const DEFAULT_LOG_FILE: &str = ".store/debug.log";

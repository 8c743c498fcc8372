// src/core/net.rs
//
// One blocking HTTP session for the whole run: connection reuse, bounded retry, request pacing.

use std::{cell::Cell, thread, time::{Duration, Instant}};

use crate::config::options::NetOptions;
use crate::error::{Result, ScrapeError};

/// A fetched page before any classification.
#[derive(Clone, Debug)]
pub struct RawPage {
    pub url: String,
    pub status: u16,
    pub body: String,
}

/// Page-fetch capability. Transport retry is the implementor's business.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<RawPage>;
}

impl<T: Fetch + ?Sized> Fetch for &T {
    fn fetch(&self, url: &str) -> Result<RawPage> {
        (**self).fetch(url)
    }
}

pub struct HttpFetcher {
    agent: ureq::Agent,
    retries: u32,
    backoff: Duration,
    pause: Duration,
    jitter_ms: u64,
    last_request: Cell<Option<Instant>>,
    requests: Cell<u64>,
}

const NOT_FOUND: u16 = 404;
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

impl HttpFetcher {
    pub fn new(opts: &NetOptions) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(&opts.user_agent)
            .timeout_connect(Duration::from_secs(opts.connect_timeout_secs))
            .timeout_read(Duration::from_secs(opts.read_timeout_secs))
            .timeout_write(Duration::from_secs(opts.read_timeout_secs))
            .build();

        Self {
            agent,
            retries: opts.retries,
            backoff: Duration::from_millis(opts.backoff_ms),
            pause: Duration::from_millis(opts.pause_ms),
            jitter_ms: opts.jitter_ms,
            last_request: Cell::new(None),
            requests: Cell::new(0),
        }
    }

    /// Sleep until at least `pause` (+ jitter) has passed since the previous request.
    fn pace(&self) {
        let n = self.requests.get();
        self.requests.set(n + 1);

        let Some(last) = self.last_request.get() else { return };
        let jitter = if self.jitter_ms == 0 { 0 } else { (n * 17) % self.jitter_ms };
        let wait = self.pause + Duration::from_millis(jitter);
        let elapsed = last.elapsed();
        if elapsed < wait {
            thread::sleep(wait - elapsed);
        }
    }

    fn transport(url: &str, reason: impl ToString) -> ScrapeError {
        ScrapeError::Transport { url: s!(url), reason: reason.to_string() }
    }
}

fn is_retryable_status(code: u16) -> bool {
    matches!(code, 408 | 429 | 500 | 502 | 503 | 504)
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<RawPage> {
        let mut attempt = 0u32;
        loop {
            self.pace();
            let result = self.agent.get(url).set("Accept", ACCEPT).call();
            self.last_request.set(Some(Instant::now()));

            let failure = match result {
                Ok(resp) => {
                    let status = resp.status();
                    match resp.into_string() {
                        Ok(body) => {
                            log::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
                            return Ok(RawPage { url: s!(url), status, body });
                        }
                        // Truncated or reset body: retried like any other transport failure
                        Err(e) => format!("reading body: {}", e),
                    }
                }
                // 404 comes back as a page so the caller can classify it
                Err(ureq::Error::Status(NOT_FOUND, resp)) => {
                    let body = resp.into_string().unwrap_or_default();
                    log::debug!("GET {} -> {} ({} bytes)", url, NOT_FOUND, body.len());
                    return Ok(RawPage { url: s!(url), status: NOT_FOUND, body });
                }
                Err(ureq::Error::Status(code, _)) if !is_retryable_status(code) => {
                    log::error!("GET {} -> {}", url, code);
                    return Err(Self::transport(url, format!("HTTP status {}", code)));
                }
                Err(e) => e.to_string(),
            };

            if attempt >= self.retries {
                log::error!("GET {} failed after {} attempt(s): {}", url, attempt + 1, failure);
                return Err(Self::transport(url, failure));
            }
            attempt += 1;
            log::warn!("GET {} failed ({}), retry {}/{}", url, failure, attempt, self.retries);
            thread::sleep(self.backoff * attempt);
        }
    }
}

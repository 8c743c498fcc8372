// tests/common/mod.rs
//
// Offline site fixtures: a fake fetcher serving canned pages and recording every URL.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use sample_scrape::config::options::ScrapeOptions;
use sample_scrape::core::net::{Fetch, RawPage};
use sample_scrape::error::{Result, ScrapeError};
use sample_scrape::specs::listing::NOT_FOUND_MARKER;

pub const BASE: &str = "https://www.whosampled.com";

#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, String>,
    broken: HashSet<String>,
    requests: RefCell<Vec<String>>,
}

impl FakeSite {
    pub fn new() -> Self { Self::default() }

    /// Serve `body` at `path` (relative to BASE).
    pub fn page(mut self, path: &str, body: impl Into<String>) -> Self {
        self.pages.insert(format!("{BASE}{path}"), body.into());
        self
    }

    /// Requests to `path` fail at the transport level.
    pub fn broken(mut self, path: &str) -> Self {
        self.broken.insert(format!("{BASE}{path}"));
        self
    }

    /// URLs requested so far, in order, relative to BASE.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|u| u.trim_start_matches(BASE).to_string())
            .collect()
    }
}

impl Fetch for FakeSite {
    fn fetch(&self, url: &str) -> Result<RawPage> {
        self.requests.borrow_mut().push(url.to_string());
        if self.broken.contains(url) {
            return Err(ScrapeError::Transport { url: url.to_string(), reason: "connection reset".into() });
        }
        match self.pages.get(url) {
            Some(body) => Ok(RawPage { url: url.to_string(), status: 200, body: body.clone() }),
            // The live site renders its 404 page with a 200 status.
            None => Ok(RawPage { url: url.to_string(), status: 200, body: not_found_page() }),
        }
    }
}

pub fn options() -> ScrapeOptions {
    ScrapeOptions { base_url: BASE.to_string(), ..ScrapeOptions::default() }
}

/* ---------------- Markup builders ---------------- */

/// One listing row as the site's block text renders it:
/// "\n<type>\n<genre>\n\n\n<title>\nby <artist> (<year>)\n"
pub fn row(sample_type: &str, genre: &str, title: &str, artist: &str, year: &str) -> String {
    format!("\n{sample_type}\n{genre}\n\n\n{title}\nby {artist} ({year})\n")
}

/// `n` distinct rows: "Track <offset+i>" by "Artist <offset+i>".
pub fn rows(n: usize, offset: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let k = offset + i;
            row("Direct Sample", "Soul / Funk / Disco", &format!("Track {k}"), &format!("Artist {k}"), "1971")
        })
        .collect()
}

pub fn block(rows: &[String]) -> String {
    format!("<div class=\"list bordered-list\">{}\t\n</div>", rows.join("\t"))
}

pub fn pagination(pages: &[u32]) -> String {
    let mut out = String::from("<div class=\"pagination\">");
    for p in pages {
        out.push_str(&format!("<span><a href=\"?cp={p}\">{p}</a></span>"));
    }
    out.push_str("</div>");
    out
}

pub fn html_page(body: &str) -> String {
    format!("<!DOCTYPE html><html><head><title>t</title></head><body><h1>Track</h1>{body}</body></html>")
}

pub fn not_found_page() -> String {
    html_page(&format!("<div class=\"errorPage\"><p>{NOT_FOUND_MARKER}</p></div>"))
}

/// Search page listing the given detail links.
pub fn search_page(hits: &[(&str, &str)]) -> String {
    let items: String = hits
        .iter()
        .map(|(link, label)| format!("<li class=\"listEntry\"><a href=\"{link}\">{label}</a></li>"))
        .collect();
    html_page(&format!("<ul class=\"searchResults\">{items}</ul>"))
}

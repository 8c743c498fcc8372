// src/scrape/resolver.rs
use urlencoding::encode;

use crate::config::consts::SEARCH_PATH;
use crate::core::net::Fetch;
use crate::error::{Result, ScrapeError};
use crate::record::Query;
use crate::specs::search::search_hits;
use super::Scraper;

/// "Halftime", "Nas" → "Halftime%20Nas"
pub fn search_query(title: &str, artist: Option<&str>) -> String {
    let mut q = encode(title.trim()).into_owned();
    if let Some(a) = artist.map(str::trim).filter(|a| !a.is_empty()) {
        q.push_str("%20");
        q.push_str(&encode(a));
    }
    q
}

impl<F: Fetch> Scraper<F> {
    pub fn search_url(&self, title: &str, artist: Option<&str>) -> String {
        format!("{}{}?q={}", self.options().base(), SEARCH_PATH, search_query(title, artist))
    }

    /// Free-text (title, artist) → site-relative detail link.
    pub fn resolve(&self, title: &str, artist: Option<&str>) -> Result<String> {
        let url = self.search_url(title, artist);
        let page = self.fetch_page(&url)?;
        if page.not_found {
            return Err(ScrapeError::NotFound(url));
        }

        let hits = search_hits(&page.document)?;
        log::debug!("{} search hit(s) for '{}'", hits.len(), title);

        let query = Query::new(title, artist);
        self.matcher
            .pick(&query, &hits)
            .map(|hit| hit.link.clone())
            .ok_or_else(|| ScrapeError::NotFound(format!("no search match for {}", query.describe())))
    }
}

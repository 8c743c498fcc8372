// src/scrape/scrape.rs
use crate::{
    config::options::ScrapeOptions,
    core::net::Fetch,
    direction::Direction,
    error::{Result, ScrapeError},
    logging,
    matcher::{self, Matcher},
    progress::Progress,
    record::{Listings, Query, SampleRecord},
    specs::listing::{self, ListingPage},
};

/// Resolver → Listing Extractor → Pager over one fetch session.
pub struct Scraper<F: Fetch> {
    fetcher: F,
    options: ScrapeOptions,
    pub(super) matcher: Box<dyn Matcher>,
}

impl<F: Fetch> Scraper<F> {
    pub fn new(fetcher: F, options: ScrapeOptions) -> Self {
        let matcher = matcher::from_mode(options.matching);
        Self { fetcher, options, matcher }
    }

    /// Replace the strategy picked from `options.matching`.
    pub fn with_matcher(mut self, matcher: impl Matcher + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn options(&self) -> &ScrapeOptions {
        &self.options
    }

    /// Absolute URL for a site-relative link.
    pub(crate) fn url_for(&self, link: &str) -> String {
        if link.starts_with("http://") || link.starts_with("https://") {
            return s!(link);
        }
        let base = self.options.base();
        if link.starts_with('/') { join!(base, link) } else { join!(base, "/", link) }
    }

    /// Fetch + classify. Transport errors propagate; a 404 page does not.
    pub(crate) fn fetch_page(&self, url: &str) -> Result<ListingPage> {
        let raw = self.fetcher.fetch(url)?;
        if let Some(dir) = &self.options.dump_dir {
            logging::dump_page(dir, url, &raw.body);
        }
        Ok(ListingPage::classify(raw))
    }

    /// Fetch a detail page and read both directions from its summary blocks.
    pub fn fetch_listing(&self, link: &str, title: &str) -> Result<Listings> {
        let page = self.fetch_page(&self.url_for(link))?;
        listing::extract_listing(&page, title, &self.options.layout)
    }

    /// Resolve, extract, and walk the paged view of every large listing.
    pub fn scrape_one(&self, query: &Query) -> Result<Listings> {
        let link = self.resolve(&query.title, query.artist.as_deref())?;
        log::info!("{} -> {}", query.describe(), link);

        let mut listings = self.fetch_listing(&link, &query.title)?;

        for direction in Direction::ALL {
            if !self.options.directions.contains(&direction) {
                listings.set(direction, Vec::new());
                continue;
            }
            let summary = listings.get(direction).len();
            if summary < self.options.page_threshold {
                continue;
            }
            log::debug!("{}: {} summary row(s) for '{}', paging", query.title, summary, direction);
            let paged = self.page_through(&link, direction, &query.title)?;
            // The summary is a prefix of page 1; keep it only if the paged view is missing.
            if !paged.is_empty() {
                listings.set(direction, paged);
            }
        }
        Ok(listings)
    }

    /// Every query in order. Unresolvable queries are skipped, transport failures are
    /// reported and skipped; neither stops the batch.
    pub fn scrape(&self, queries: &[Query], mut progress: Option<&mut dyn Progress>) -> Vec<SampleRecord> {
        if let Some(p) = progress.as_deref_mut() {
            p.begin(queries.len());
        }

        let mut out = Vec::new();
        for (i, query) in queries.iter().enumerate() {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&query.describe());
            }
            match self.scrape_one(query) {
                Ok(listings) => {
                    let records = listings.into_records(&self.options.directions);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(i, query, records.len());
                    }
                    out.extend(records);
                }
                Err(ScrapeError::NotFound(what)) => {
                    log::info!("{}: nothing found ({})", query.describe(), what);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(i, query, 0);
                    }
                }
                Err(e) => {
                    log::error!("{}: {}", query.describe(), e);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(i, query, &e);
                    }
                }
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        out
    }
}

// src/scrape/pager.rs
use crate::core::net::Fetch;
use crate::direction::Direction;
use crate::error::Result;
use crate::record::SampleRecord;
use crate::specs::listing::extract_direction;
use crate::specs::pagination::{page_count, page_url, PageCount};
use super::Scraper;

impl<F: Fetch> Scraper<F> {
    /// `<base><link><segment>/`
    pub fn sub_listing_url(&self, link: &str, direction: Direction) -> String {
        let detail = self.url_for(link);
        let sep = if detail.ends_with('/') { "" } else { "/" };
        format!("{}{}{}/", detail, sep, direction.path_segment())
    }

    /// All rows of one direction's paged view, page 1 first.
    /// A missing paged view yields an empty list, not an error.
    pub fn page_through(&self, link: &str, direction: Direction, title: &str) -> Result<Vec<SampleRecord>> {
        let listing_url = self.sub_listing_url(link, direction);
        let layout = &self.options().layout;

        let first = self.fetch_page(&listing_url)?;
        if first.not_found {
            log::debug!("{}: no paged view", listing_url);
            return Ok(Vec::new());
        }
        let mut records = extract_direction(&first, title, direction, layout)?;

        let last = match page_count(&first.document) {
            PageCount::Single => return Ok(records),
            PageCount::UpTo(n) => n,
            PageCount::Unknown(why) => {
                log::warn!("{}: unreadable pagination ({}), keeping page 1", listing_url, why);
                return Ok(records);
            }
        };
        log::debug!("{}: {} page(s)", listing_url, last);

        // Page 1 is the listing URL itself.
        for n in 2..=last {
            let page = self.fetch_page(&page_url(&listing_url, n))?;
            if page.not_found {
                log::warn!("{}: page {} of {} missing, stopping", listing_url, n, last);
                break;
            }
            records.extend(extract_direction(&page, title, direction, layout)?);
        }
        Ok(records)
    }
}

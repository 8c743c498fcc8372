// src/specs/listing.rs
//
// Detail and paged sub-listing pages.
//
// Block order on a detail page: "contains samples of", "was sampled in", then
// covers/remixes (ignored). A paged sub-listing carries one block for its direction.

use crate::core::{html, Document, RawPage};
use crate::direction::Direction;
use crate::error::{Result, ScrapeError};
use crate::record::{Listings, SampleRecord};
use super::row::{parse_block, RowLayout};

pub const NOT_FOUND_MARKER: &str = "The page you requested cannot be found";
pub const LISTING_TAG: &str = "div";
pub const LISTING_CLASS: &str = "list bordered-list";

/// A fetched page, parsed and classified. Consumed once.
pub struct ListingPage {
    pub url: String,
    pub document: Document,
    pub not_found: bool,
}

impl ListingPage {
    pub fn classify(raw: RawPage) -> Self {
        let not_found = is_not_found(&raw);
        Self { document: Document::parse(&raw.body), url: raw.url, not_found }
    }
}

/// The site answers missing resources with a content page (often with status 200).
pub fn is_not_found(raw: &RawPage) -> bool {
    raw.status == 404 || raw.body.contains(NOT_FOUND_MARKER)
}

/// Text of every listing block, in document order.
pub fn listing_blocks(doc: &Document) -> Result<Vec<String>> {
    Ok(doc
        .find_all(LISTING_TAG, LISTING_CLASS)?
        .into_iter()
        .map(html::text_of)
        .collect())
}

/// Detail page → both directions. No blocks is a valid, empty result.
pub fn extract_listing(page: &ListingPage, title: &str, layout: &RowLayout) -> Result<Listings> {
    if page.not_found {
        return Err(ScrapeError::NotFound(page.url.clone()));
    }
    let blocks = listing_blocks(&page.document)?;
    if blocks.len() > 2 {
        log::debug!("{}: ignoring {} extra listing block(s)", page.url, blocks.len() - 2);
    }

    let mut listings = Listings::default();
    for (block, direction) in blocks.iter().zip(Direction::ALL) {
        listings.set(direction, parse_block(block, title, direction, layout));
    }
    Ok(listings)
}

/// Paged sub-listing → one direction (first block only).
pub fn extract_direction(
    page: &ListingPage,
    title: &str,
    direction: Direction,
    layout: &RowLayout,
) -> Result<Vec<SampleRecord>> {
    if page.not_found {
        return Err(ScrapeError::NotFound(page.url.clone()));
    }
    let blocks = listing_blocks(&page.document)?;
    Ok(blocks
        .first()
        .map(|b| parse_block(b, title, direction, layout))
        .unwrap_or_default())
}

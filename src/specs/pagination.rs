// src/specs/pagination.rs
//
// The pagination control is the only place the page count shows up:
//   <div class="pagination"><span><a href="?cp=2">2</a></span> … <span><a href="?cp=2">Next</a></span></div>
// "Next" may sit after the true maximum, so the bound is the largest index among all links.

use crate::core::{html, Document};
use crate::error::Result;

pub const PAGINATION_TAG: &str = "div";
pub const PAGINATION_CLASS: &str = "pagination";
pub const PAGE_PARAM: &str = "cp";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageCount {
    /// No control, or a control without links.
    Single,
    /// Pages 1..=n exist.
    UpTo(u32),
    /// Links present but none carries a page index.
    Unknown(String),
}

/// `<sub-listing>?cp=N`
pub fn page_url(listing_url: &str, page: u32) -> String {
    format!("{}?{}={}", listing_url, PAGE_PARAM, page)
}

/// Index from "?cp=7" (value after the last '='), else from the link text.
fn link_index(href: Option<&str>, text: &str) -> Option<u32> {
    href.and_then(|h| h.rsplit_once('='))
        .and_then(|(_, v)| v.trim().parse().ok())
        .or_else(|| text.trim().parse().ok())
}

/// None when there is no control or it renders no links; otherwise every index found
/// (possibly empty when no link is numeric).
pub fn page_indices(doc: &Document) -> Result<Option<Vec<u32>>> {
    let Some(control) = doc.find_all(PAGINATION_TAG, PAGINATION_CLASS)?.into_iter().next() else {
        return Ok(None);
    };
    let links = html::select_within(control, "span a")?;
    if links.is_empty() {
        return Ok(None);
    }
    Ok(Some(
        links
            .into_iter()
            .filter_map(|a| link_index(html::attr(a, "href"), &html::text_of(a)))
            .collect(),
    ))
}

pub fn upper_bound(indices: &[u32]) -> Option<u32> {
    indices.iter().copied().max()
}

pub fn page_count(doc: &Document) -> PageCount {
    match page_indices(doc) {
        Ok(None) => PageCount::Single,
        Ok(Some(indices)) => match upper_bound(&indices) {
            Some(n) => PageCount::UpTo(n),
            None => PageCount::Unknown(s!("pagination links carry no page index")),
        },
        Err(e) => PageCount::Unknown(e.to_string()),
    }
}

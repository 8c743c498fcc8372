// src/specs/search.rs
// Search results: <li class="listEntry"><a href="/Artist/Track/">…</a> …</li>

use crate::core::{html, sanitize::normalize_ws, Document};
use crate::error::Result;

pub const RESULT_TAG: &str = "li";
pub const RESULT_CLASS: &str = "listEntry";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    /// Site-relative detail path, e.g. "/Nas/Halftime/".
    pub link: String,
    /// Visible text of the entry (title + artist as rendered).
    pub label: String,
}

/// Hits in rank order; entries without a link are skipped.
pub fn search_hits(doc: &Document) -> Result<Vec<SearchHit>> {
    let mut hits = Vec::new();
    for entry in doc.find_all(RESULT_TAG, RESULT_CLASS)? {
        let link = html::select_within(entry, "a")?
            .into_iter()
            .next()
            .and_then(|a| html::attr(a, "href"));
        match link {
            Some(link) => hits.push(SearchHit {
                link: s!(link),
                label: normalize_ws(&html::text_of(entry)),
            }),
            None => log::debug!("search entry without link skipped"),
        }
    }
    Ok(hits)
}

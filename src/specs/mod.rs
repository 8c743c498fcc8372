// src/specs/mod.rs
//! # Page specs
//!
//! Where the ground truth lives in the site's markup and how to read it. Pure
//! parsing only: nothing in here fetches, retries or decides what to scrape next.
//!
//! ## Markup relied upon
//! - search results: `li.listEntry`, first `a[href]` is the detail path
//! - listing rows: `div.list.bordered-list`, text split into rows on `'\t'` and fields on `'\n'`
//! - pagination: `div.pagination span a`, one link per visible page (`?cp=N`)
//! - missing pages: [`listing::NOT_FOUND_MARKER`] anywhere in the body
//!
//! When the site changes its markup, this module (and [`row::RowLayout`]) is where the
//! edit goes.
//!
//! ## Call chain
//! ```text
//! scrape::Scraper → core::net::Fetch → specs::listing::ListingPage::classify
//!                                    ↘ specs::{search, listing, pagination, row}
//! ```
pub mod listing;
pub mod pagination;
pub mod row;
pub mod search;

// src/scrape/mod.rs
mod pager;
mod resolver;
mod scrape;

pub use scrape::Scraper;

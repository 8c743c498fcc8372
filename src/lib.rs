// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod direction;
pub mod error;
pub mod file;
pub mod logging;
pub mod matcher;
pub mod progress;
pub mod record;
pub mod scrape;

pub use direction::Direction;
pub use error::{Result, ScrapeError};
pub use record::{Listings, Query, SampleRecord};
pub use scrape::Scraper;

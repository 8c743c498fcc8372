// src/progress.rs
use crate::error::ScrapeError;
use crate::record::Query;

/// Progress reporting for a batch scrape.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of queries.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A query finished; `records` may be zero (nothing found is not a failure).
    fn item_done(&mut self, _index: usize, _query: &Query, _records: usize) {}

    /// A query failed (transport) and was skipped.
    fn item_failed(&mut self, _index: usize, _query: &Query, _error: &ScrapeError) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

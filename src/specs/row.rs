// src/specs/row.rs
//
// Listing-block rows → SampleRecord.
//
// A block's text is delimiter-structured: rows end at '\t', fields within a row are
// separated by '\n'. Leading field count varies between row variants, so fields are
// addressed from the END of the row.

use crate::core::sanitize::normalize_ws;
use crate::direction::Direction;
use crate::error::{Result, ScrapeError};
use crate::record::SampleRecord;

pub const ROW_DELIM: char = '\t';
pub const FIELD_DELIM: char = '\n';

/// Named offsets from the end of a row's field list (1 = last field).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowLayout {
    pub sample_type: usize,
    pub genre: usize,
    pub title: usize,
    /// "by <artist> (<year>)"
    pub credit: usize,
}

impl RowLayout {
    pub const DEFAULT: RowLayout = RowLayout { sample_type: 7, genre: 6, title: 3, credit: 2 };

    pub fn min_fields(&self) -> usize {
        self.sample_type.max(self.genre).max(self.title).max(self.credit)
    }

    fn field<'a>(&self, fields: &[&'a str], offset: usize) -> &'a str {
        fields
            .len()
            .checked_sub(offset)
            .and_then(|i| fields.get(i))
            .copied()
            .unwrap_or("")
    }
}

impl Default for RowLayout {
    fn default() -> Self { Self::DEFAULT }
}

/// Split block text into rows, dropping blank entries (incl. the trailing one).
pub fn split_rows(text: &str) -> Vec<&str> {
    text.split(ROW_DELIM).filter(|r| !r.trim().is_empty()).collect()
}

/// "by Kool & the Gang (1971)" → ("Kool & the Gang", "1971")
/// Only the first "by " is stripped. Missing year → "".
pub fn split_credit(credit: &str) -> (String, String) {
    let credit = credit.trim();
    let rest = credit.strip_prefix("by ").unwrap_or(credit);
    match rest.rsplit_once(" (") {
        Some((artist, year)) => (normalize_ws(artist), normalize_ws(year.trim_end_matches(')'))),
        None => (normalize_ws(rest), s!()),
    }
}

pub fn parse_row(row: &str, query: &str, direction: Direction, layout: &RowLayout) -> Result<SampleRecord> {
    let fields: Vec<&str> = row.split(FIELD_DELIM).collect();
    let needed = layout.min_fields();
    if fields.len() < needed {
        return Err(ScrapeError::MalformedRow(format!("{} field(s), need {}", fields.len(), needed)));
    }

    let (artist, year) = split_credit(layout.field(&fields, layout.credit));
    let record = SampleRecord {
        query: s!(query),
        direction,
        sample_type: normalize_ws(layout.field(&fields, layout.sample_type)),
        genre: normalize_ws(layout.field(&fields, layout.genre)),
        title: normalize_ws(layout.field(&fields, layout.title)),
        artist,
        year,
    };

    if !record.is_valid() {
        return Err(ScrapeError::MalformedRow(format!("empty required field in {:?}", record)));
    }
    Ok(record)
}

/// Parse every row of a block; malformed rows are dropped.
pub fn parse_block(text: &str, query: &str, direction: Direction, layout: &RowLayout) -> Vec<SampleRecord> {
    let mut out = Vec::new();
    for row in split_rows(text) {
        match parse_row(row, query, direction, layout) {
            Ok(rec) => out.push(rec),
            Err(e) => log::debug!("{query} / {direction}: dropped row: {e}"),
        }
    }
    out
}

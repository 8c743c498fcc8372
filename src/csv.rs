// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::record::{Query, SampleRecord};

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush a trailing row without newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Rows of `title[,artist]` → queries. Blank titles and a `title,artist` header are skipped.
pub fn read_queries(text: &str, sep: char) -> Vec<Query> {
    let mut out = Vec::new();
    for (i, row) in parse_rows(text, sep).into_iter().enumerate() {
        let title = row.first().map(|t| t.trim()).unwrap_or("");
        if title.is_empty() { continue; }
        if i == 0 && (title.eq_ignore_ascii_case("title") || title.eq_ignore_ascii_case("track")) {
            continue;
        }
        out.push(Query::new(title, row.get(1).map(String::as_str)));
    }
    out
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

pub fn write_records<W: Write>(
    mut w: W,
    records: &[SampleRecord],
    sep: char,
    include_headers: bool,
) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &SampleRecord::HEADERS, sep)?;
    }
    for r in records {
        write_row(&mut w, &r.to_row(), sep)?;
    }
    Ok(())
}

/// Full export as a string (for clipboard-style output or tests).
pub fn to_export_string(records: &[SampleRecord], sep: char, include_headers: bool) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_records(&mut buf, records, sep, include_headers);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    #[test]
    fn quotes_only_when_needed() {
        let rec = SampleRecord {
            query: s!("Halftime"),
            direction: Direction::ContainsSampleOf,
            sample_type: s!("Direct Sample"),
            genre: s!("Soul / Funk / Disco"),
            title: s!("Dreams, \"Part 1\""),
            artist: s!("Kool & the Gang"),
            year: s!("1971"),
        };
        let out = to_export_string(&[rec], ',', true);
        assert_eq!(
            out,
            "Query,Direction,Type,Genre,Title,Artist,Year\n\
             Halftime,contains_sample_of,Direct Sample,Soul / Funk / Disco,\"Dreams, \"\"Part 1\"\"\",Kool & the Gang,1971\n"
        );
    }

    #[test]
    fn queries_from_tsv_with_header() {
        let text = "title\tartist\nHalftime\tNas\n\nMidnight Blue\tKenny Burrell\r\nPaid in Full\n";
        let qs = read_queries(text, '\t');
        assert_eq!(qs.len(), 3);
        assert_eq!(qs[0], Query::new("Halftime", Some("Nas")));
        assert_eq!(qs[1].artist.as_deref(), Some("Kenny Burrell"));
        assert_eq!(qs[2].artist, None);
    }
}

// src/core/html.rs
//
// Thin query layer over the parsed page: find-all-by-tag-and-class, attribute, text.
// Page specs depend on this, not on the parser crate directly.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(raw: &str) -> Self {
        Self { html: Html::parse_document(raw) }
    }

    /// All `<tag>` elements carrying every class in `class` (space separated), in document order.
    pub fn find_all(&self, tag: &str, class: &str) -> Result<Vec<ElementRef<'_>>> {
        let sel = class_selector(tag, class)?;
        Ok(self.html.select(&sel).collect())
    }
}

/// "div", "list bordered-list" → `div.list.bordered-list`
pub fn class_selector(tag: &str, class: &str) -> Result<Selector> {
    let classes: String = class.split_whitespace().map(|c| join!(".", c)).collect();
    let css = join!(tag, &classes);
    Selector::parse(&css).map_err(|_| ScrapeError::UnexpectedLayout(format!("bad selector '{}'", css)))
}

/// Descendants of `el` matching a plain CSS selector.
pub fn select_within<'a>(el: ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>> {
    let sel = Selector::parse(css)
        .map_err(|_| ScrapeError::UnexpectedLayout(format!("bad selector '{}'", css)))?;
    Ok(el.select(&sel).collect())
}

/// Concatenated text nodes, untouched (delimiters preserved).
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

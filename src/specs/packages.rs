// src/specs/packages.rs
//! Scraping *spec* for the parcel listing pages (`mf-packages/`, `package/?status=…`).
//!
//! Every listing renders each parcel as a title cell and a status badge:
//! - title: any element whose `class` contains `td-text`; its first child element is the
//!   link to the parcel page.
//! - status: any element whose `class` contains `td-label`.
//!
//! Titles and badges are paired by document order. Class matching is a substring match,
//! so `td-text-wide` also counts as a title.

use std::error::Error;

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::{normalize_ws, trim_cell};
use crate::parcel::ParcelItem;
use crate::status::StatusKind;

const TITLE_SELECTOR: &str = r#"[class*="td-text"]"#;
const STATUS_SELECTOR: &str = r#"[class*="td-label"]"#;

fn selector(css: &str) -> Result<Selector, Box<dyn Error>> {
    Selector::parse(css).map_err(|e| format!("Bad selector {css}: {e}").into())
}

/// Parse one listing page into parcel rows. A page without rows yields an empty Vec.
pub fn extract(doc: &str) -> Result<Vec<ParcelItem>, Box<dyn Error>> {
    let titles_sel = selector(TITLE_SELECTOR)?;
    let statuses_sel = selector(STATUS_SELECTOR)?;

    let html = Html::parse_document(doc);
    let statuses: Vec<String> = html
        .select(&statuses_sel)
        .map(|el| s!(trim_cell(&text_of(el))))
        .collect();

    let mut out = Vec::new();
    for (i, title_el) in html.select(&titles_sel).enumerate() {
        let title = text_of(title_el);
        let raw_status = statuses.get(i).map(String::as_str).unwrap_or("");
        let href = title_el
            .children()
            .find_map(ElementRef::wrap)
            .and_then(|child| child.value().attr("href"));

        let item = ParcelItem::new(trim_cell(&title), raw_status, href);
        if item.status == StatusKind::Unrecognized {
            logd!("Unrecognized status '{}' for '{}'", raw_status, normalize_ws(&item.title));
        }
        out.push(item);
    }

    Ok(out)
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

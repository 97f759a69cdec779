// src/parcel.rs
use std::sync::OnceLock;

use md5::{Digest, Md5};
use regex::Regex;

use crate::status::StatusKind;

/// One row of a listing page. Rebuilt from HTML on every run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParcelItem {
    pub id: String,
    pub title: String,
    pub raw_status: String,
    pub status: StatusKind,
    pub href: Option<String>,
}

impl ParcelItem {
    /// Build from scraped text. Empty `href` counts as no link.
    pub fn new(title: &str, raw_status: &str, href: Option<&str>) -> Self {
        Self {
            id: parcel_id(title),
            title: s!(title),
            raw_status: s!(raw_status),
            status: StatusKind::from_label(raw_status),
            href: href.filter(|h| !h.is_empty()).map(String::from),
        }
    }

    /// Text shown in the menu and in notifications. Unrecognized statuses show the raw
    /// label so catalog gaps are visible.
    pub fn display_status(&self) -> &str {
        match self.status {
            StatusKind::Unrecognized => &self.raw_status,
            kind => kind.text(),
        }
    }
}

fn code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(R\d+)").expect("parcel code regex"))
}

/// Leading `R<digits>` code of the title, or the md5 hex of the whole title.
pub fn parcel_id(title: &str) -> String {
    match code_re().captures(title).and_then(|c| c.get(1)) {
        Some(code) => s!(code.as_str()),
        None => hex::encode(Md5::digest(title.as_bytes())),
    }
}

// src/specs/mod.rs
//! # Page specs
//!
//! Page-specific extraction: where the parcel data lives in the site's HTML and how to
//! read it. Specs are pure: they take a document string and return rows.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), merging/sorting across pages (`scrape`), persistence (`store`).
//!
//! ## Testing notes
//! - Specs are tested offline against captured fixtures in `tests/fixtures/`.
pub mod packages;

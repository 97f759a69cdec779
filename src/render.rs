// src/render.rs
//! Presenter for the SwiftBar/xbar text protocol.
//!
//! Layout (exact bytes matter, the host parses them):
//! ```text
//! |image=<base64 png>
//! ---
//! <title>: <status> | href=<link> color=<hex>
//! ---
//! Обновить | href=swiftbar://refreshplugin?name=bayshop
//! ```
//! The refresh line has no trailing newline.

use std::error::Error;

use crate::config::consts::{ERROR_COLOR, NO_PARCELS_TEXT, REFRESH_BUTTON};
use crate::config::options::{PluginOptions, Theme};
use crate::core::IconPainter;
use crate::parcel::ParcelItem;

fn header(painter: &dyn IconPainter, color: &str) -> Result<String, Box<dyn Error>> {
    let mut out = s!();
    push_line!(out, "|image={}", painter.paint(color)?);
    push_line!(out, "---");
    Ok(out)
}

/// One menu line for a parcel, including the trailing newline.
pub fn parcel_line(item: &ParcelItem, options: &PluginOptions) -> String {
    let link = item
        .href
        .as_deref()
        .map(|href| format!("href={}", options.link_url(href)))
        .unwrap_or_default();

    format!(
        "{}: {} | {} color={}\n",
        item.title,
        item.display_status(),
        link,
        item.status.color(),
    )
}

/// Full listing. `items` must already be sorted; the first one colors the icon.
pub fn listing(
    items: &[ParcelItem],
    painter: &dyn IconPainter,
    options: &PluginOptions,
) -> Result<String, Box<dyn Error>> {
    let Some(top) = items.first() else {
        return empty(painter, options.theme);
    };

    let mut out = header(painter, top.status.color())?;
    for item in items {
        out.push_str(&parcel_line(item, options));
    }
    out.push_str("---\n");
    out.push_str(REFRESH_BUTTON);
    Ok(out)
}

/// "No parcels" state in the theme's neutral color.
pub fn empty(painter: &dyn IconPainter, theme: Theme) -> Result<String, Box<dyn Error>> {
    let neutral = theme.neutral_color();
    let mut out = header(painter, neutral)?;
    push_line!(out, "{NO_PARCELS_TEXT} | color={neutral}");
    out.push_str("---\n");
    out.push_str(REFRESH_BUTTON);
    Ok(out)
}

/// Fatal state: red icon and a single message line.
pub fn fatal(painter: &dyn IconPainter, message: &str, theme: Theme) -> Result<String, Box<dyn Error>> {
    let mut out = header(painter, ERROR_COLOR)?;
    out.push_str(&format!("{message} | color={}", theme.neutral_color()));
    Ok(out)
}

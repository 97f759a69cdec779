// src/core/icon.rs
// Menu-bar icon: one monochrome template, recolored per state.

use std::error::Error;
use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::config::consts::ICON_SIZE;

/// Produces the base64 PNG that goes after `|image=` in the header line.
pub trait IconPainter {
    fn paint(&self, color: &str) -> Result<String, Box<dyn Error>>;
}

const TEMPLATE_PNG: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/parcel.png"));

/// Recolors the embedded template and shrinks it to menu-bar size.
pub struct TemplatePainter {
    template: RgbaImage,
    size: u32,
}

impl TemplatePainter {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Self::from_png(TEMPLATE_PNG, ICON_SIZE)
    }

    pub fn from_png(bytes: &[u8], size: u32) -> Result<Self, Box<dyn Error>> {
        let template = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.to_rgba8();
        Ok(Self { template, size })
    }

    /// Recolored and resized icon, before encoding.
    pub fn render(&self, color: &str) -> Result<RgbaImage, Box<dyn Error>> {
        let [r, g, b] = parse_hex_color(color)?;
        let mut img = self.template.clone();

        for px in img.pixels_mut() {
            let Rgba([pr, pg, pb, a]) = *px;
            *px = if (pr, pg, pb, a) == (255, 255, 255, 255) {
                Rgba([0, 0, 0, 0])
            } else {
                Rgba([r, g, b, a])
            };
        }

        Ok(imageops::resize(&img, self.size, self.size, FilterType::Lanczos3))
    }
}

impl IconPainter for TemplatePainter {
    fn paint(&self, color: &str) -> Result<String, Box<dyn Error>> {
        let img = self.render(color)?;
        let mut png = Vec::new();
        DynamicImage::ImageRgba8(img).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(base64::encode(png))
    }
}

/// `#rrggbb` → `[r, g, b]`.
pub fn parse_hex_color(color: &str) -> Result<[u8; 3], Box<dyn Error>> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(format!("Bad color: {color}").into());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

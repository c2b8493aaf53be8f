//! Launcher icon rendering for Android density buckets.

use anyhow::{Context, Result};
use image::DynamicImage;
use image::ImageFormat;
use image::imageops::FilterType;
use std::io::Cursor;

/// Output directory name and icon edge length for each density bucket.
pub const DENSITIES: &[(&str, u32)] = &[
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

/// Primary launcher icon filename.
pub const LAUNCHER_ICON: &str = "ic_launcher.png";

/// Round launcher icon filename (API 26+). Ships the same pixels as the
/// square icon; the launcher applies its own mask.
pub const LAUNCHER_ICON_ROUND: &str = "ic_launcher_round.png";

/// Decodes a source image once and renders fixed-size PNG icons from it.
#[derive(Debug)]
pub struct Scaler {
    img: DynamicImage,
}

impl Scaler {
    /// Decode the source image from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes).context("Failed to decode source image")?;
        Ok(Self { img })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.img.width(), self.img.height())
    }

    /// Render a `size`x`size` PNG in memory.
    pub fn render_png(&self, size: u32) -> Result<Vec<u8>> {
        let resized = self.img.resize_exact(size, size, FilterType::Lanczos3);
        let mut buf = Cursor::new(Vec::new());
        resized
            .write_to(&mut buf, ImageFormat::Png)
            .with_context(|| format!("Failed to encode {}x{} PNG", size, size))?;
        Ok(buf.into_inner())
    }
}

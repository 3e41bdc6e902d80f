//! Image fixtures and fake collaborators for integration tests.

use image::{DynamicImage, RgbImage};
use std::io::Cursor;

use swatchd::error::ExtractError;
use swatchd::models::{Palette, Rgb, Swatch, SwatchRole};
use swatchd::services::PaletteExtractor;

/// Encode a solid-color PNG
pub fn solid_png(r: u8, g: u8, b: u8) -> Vec<u8> {
    let img = RgbImage::from_pixel(64, 64, image::Rgb([r, g, b]));
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buffer, image::ImageOutputFormat::Png)
        .expect("Failed to encode fixture PNG");
    buffer.into_inner()
}

/// A clearly red image, guaranteed to produce a Vibrant swatch
pub fn red_png() -> Vec<u8> {
    solid_png(220, 30, 30)
}

/// A grayscale image, guaranteed to produce no Vibrant swatch
pub fn gray_png() -> Vec<u8> {
    solid_png(128, 128, 128)
}

/// Fake extractor returning a fixed palette regardless of input
pub struct FixedPaletteExtractor {
    pub palette: Palette,
}

impl FixedPaletteExtractor {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Palette with Muted swatches but no Vibrant entry
    pub fn without_vibrant() -> Self {
        let mut palette = Palette::new();
        palette.insert(SwatchRole::Muted, Swatch::from_rgb(Rgb::new(120, 110, 100), 50));
        palette.insert(
            SwatchRole::DarkMuted,
            Swatch::from_rgb(Rgb::new(60, 55, 50), 20),
        );
        Self::new(palette)
    }

    /// Palette whose Vibrant swatch only carries a raw hex field
    pub fn with_raw_hex_vibrant(hex: &str) -> Self {
        let mut palette = Palette::new();
        palette.insert(
            SwatchRole::Vibrant,
            Swatch {
                rgb: None,
                raw_hex: Some(hex.to_string()),
                population: 10,
            },
        );
        Self::new(palette)
    }
}

impl PaletteExtractor for FixedPaletteExtractor {
    fn extract(&self, _bytes: &[u8]) -> Result<Palette, ExtractError> {
        Ok(self.palette.clone())
    }
}

/// Fake extractor that always fails
pub struct FailingExtractor;

impl PaletteExtractor for FailingExtractor {
    fn extract(&self, _bytes: &[u8]) -> Result<Palette, ExtractError> {
        Err(ExtractError::EmptyImage)
    }
}

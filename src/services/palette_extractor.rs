//! Palette extraction from raw image bytes.
//!
//! Decoding is delegated to the `image` crate and color-space math to the
//! `palette` crate; this module only bins sampled pixels and matches them
//! against per-role saturation/lightness targets.

use crate::error::ExtractError;
use crate::models::{Palette, Rgb, Swatch, SwatchRole};
use palette::{Hsl, IntoColor, Srgb};
use std::collections::HashMap;

/// Extracts a palette of role-tagged swatches from raw image bytes.
pub trait PaletteExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<Palette, ExtractError>;
}

/// Saturation/lightness target for one swatch role.
struct RoleTarget {
    role: SwatchRole,
    saturation: f32,
    saturation_range: (f32, f32),
    lightness: f32,
    lightness_range: (f32, f32),
}

/// Targets follow the conventional vibrant/muted definitions: vibrant roles
/// want high saturation, muted roles low, with light/dark variants shifting
/// the lightness band.
const ROLE_TARGETS: [RoleTarget; 6] = [
    RoleTarget {
        role: SwatchRole::Vibrant,
        saturation: 1.0,
        saturation_range: (0.35, 1.0),
        lightness: 0.5,
        lightness_range: (0.3, 0.7),
    },
    RoleTarget {
        role: SwatchRole::LightVibrant,
        saturation: 1.0,
        saturation_range: (0.35, 1.0),
        lightness: 0.74,
        lightness_range: (0.55, 1.0),
    },
    RoleTarget {
        role: SwatchRole::DarkVibrant,
        saturation: 1.0,
        saturation_range: (0.35, 1.0),
        lightness: 0.26,
        lightness_range: (0.0, 0.45),
    },
    RoleTarget {
        role: SwatchRole::Muted,
        saturation: 0.3,
        saturation_range: (0.0, 0.4),
        lightness: 0.5,
        lightness_range: (0.3, 0.7),
    },
    RoleTarget {
        role: SwatchRole::LightMuted,
        saturation: 0.3,
        saturation_range: (0.0, 0.4),
        lightness: 0.74,
        lightness_range: (0.55, 1.0),
    },
    RoleTarget {
        role: SwatchRole::DarkMuted,
        saturation: 0.3,
        saturation_range: (0.0, 0.4),
        lightness: 0.26,
        lightness_range: (0.0, 0.45),
    },
];

const WEIGHT_SATURATION: f32 = 3.0;
const WEIGHT_LIGHTNESS: f32 = 6.5;
const WEIGHT_POPULATION: f32 = 0.5;

/// Thumbnail edge used to bound the number of sampled pixels.
const SAMPLE_EDGE: u32 = 112;

/// A binned candidate color with its sample count.
struct Candidate {
    rgb: Rgb,
    population: u32,
    saturation: f32,
    lightness: f32,
}

/// Default palette extractor.
pub struct VibrantExtractor;

impl VibrantExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Bin thumbnail pixels into coarse RGB buckets, keeping the mean color
    /// and sample count per bucket.
    fn candidates(bytes: &[u8]) -> Result<Vec<Candidate>, ExtractError> {
        let img = image::load_from_memory(bytes)?;
        let thumb = img.thumbnail(SAMPLE_EDGE, SAMPLE_EDGE).to_rgb8();

        // 5 bits per channel
        let mut buckets: HashMap<(u8, u8, u8), (u64, u64, u64, u32)> = HashMap::new();
        for pixel in thumb.pixels() {
            let [r, g, b] = pixel.0;
            let key = (r >> 3, g >> 3, b >> 3);
            let entry = buckets.entry(key).or_insert((0, 0, 0, 0));
            entry.0 += r as u64;
            entry.1 += g as u64;
            entry.2 += b as u64;
            entry.3 += 1;
        }

        if buckets.is_empty() {
            return Err(ExtractError::EmptyImage);
        }

        let mut candidates: Vec<Candidate> = buckets
            .into_values()
            .map(|(sum_r, sum_g, sum_b, count)| {
                let rgb = Rgb::new(
                    (sum_r / count as u64) as u8,
                    (sum_g / count as u64) as u8,
                    (sum_b / count as u64) as u8,
                );
                let hsl: Hsl = Srgb::new(
                    rgb.r as f32 / 255.0,
                    rgb.g as f32 / 255.0,
                    rgb.b as f32 / 255.0,
                )
                .into_color();
                Candidate {
                    rgb,
                    population: count,
                    saturation: hsl.saturation,
                    lightness: hsl.lightness,
                }
            })
            .collect();

        candidates.sort_by(|a, b| b.population.cmp(&a.population));
        candidates.truncate(64);
        Ok(candidates)
    }

    fn score(candidate: &Candidate, target: &RoleTarget, max_population: u32) -> f32 {
        let saturation_score = 1.0 - (candidate.saturation - target.saturation).abs();
        let lightness_score = 1.0 - (candidate.lightness - target.lightness).abs();
        let population_score = candidate.population as f32 / max_population as f32;

        WEIGHT_SATURATION * saturation_score
            + WEIGHT_LIGHTNESS * lightness_score
            + WEIGHT_POPULATION * population_score
    }

    fn in_range(value: f32, (min, max): (f32, f32)) -> bool {
        value >= min && value <= max
    }
}

impl Default for VibrantExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteExtractor for VibrantExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<Palette, ExtractError> {
        let candidates = Self::candidates(bytes)?;
        let max_population = candidates
            .iter()
            .map(|c| c.population)
            .max()
            .ok_or(ExtractError::EmptyImage)?;

        let mut palette = Palette::new();
        for target in &ROLE_TARGETS {
            let best = candidates
                .iter()
                .filter(|c| {
                    Self::in_range(c.saturation, target.saturation_range)
                        && Self::in_range(c.lightness, target.lightness_range)
                })
                .max_by(|a, b| {
                    Self::score(a, target, max_population)
                        .total_cmp(&Self::score(b, target, max_population))
                });

            if let Some(candidate) = best {
                palette.insert(
                    target.role,
                    Swatch::from_rgb(candidate.rgb, candidate.population),
                );
            }
        }

        tracing::debug!(swatches = palette.len(), "Extracted palette");
        Ok(palette)
    }
}

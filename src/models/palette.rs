//! Palette domain model: swatch roles, swatches, and hex rendering.

use std::collections::HashMap;
use std::fmt;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Render as lowercase "#rrggbb".
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a "#RRGGBB" string (leading '#' optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Qualitative role of a swatch within a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwatchRole {
    Vibrant,
    LightVibrant,
    DarkVibrant,
    Muted,
    LightMuted,
    DarkMuted,
}

impl SwatchRole {
    pub const ALL: [SwatchRole; 6] = [
        SwatchRole::Vibrant,
        SwatchRole::LightVibrant,
        SwatchRole::DarkVibrant,
        SwatchRole::Muted,
        SwatchRole::LightMuted,
        SwatchRole::DarkMuted,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SwatchRole::Vibrant => "Vibrant",
            SwatchRole::LightVibrant => "LightVibrant",
            SwatchRole::DarkVibrant => "DarkVibrant",
            SwatchRole::Muted => "Muted",
            SwatchRole::LightMuted => "LightMuted",
            SwatchRole::DarkMuted => "DarkMuted",
        }
    }
}

/// A representative color extracted from an image.
///
/// A swatch normally carries an `rgb` value; extractors that only produce a
/// pre-rendered hex string may fill `raw_hex` instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Swatch {
    pub rgb: Option<Rgb>,
    pub raw_hex: Option<String>,
    /// Number of sampled pixels this swatch represents.
    pub population: u32,
}

impl Swatch {
    pub fn from_rgb(rgb: Rgb, population: u32) -> Self {
        Self {
            rgb: Some(rgb),
            raw_hex: None,
            population,
        }
    }

    /// The swatch color as a hex string, preferring the structured `rgb`
    /// value and falling back to `raw_hex`. `None` means the swatch carries
    /// no renderable color.
    pub fn hex(&self) -> Option<String> {
        self.rgb
            .map(Rgb::to_hex)
            .or_else(|| self.raw_hex.clone())
    }
}

/// The full mapping of swatch role to swatch produced for one image.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    swatches: HashMap<SwatchRole, Swatch>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: SwatchRole, swatch: Swatch) {
        self.swatches.insert(role, swatch);
    }

    pub fn get(&self, role: SwatchRole) -> Option<&Swatch> {
        self.swatches.get(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }
}

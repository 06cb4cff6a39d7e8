//! Color primitives for display output.

use serde::{Deserialize, Serialize};

/// An RGB color with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0 }
    }

    /// Clamp every channel to [0, 1].
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Quantize to 8-bit RGBA with full alpha.
    pub fn to_rgba8(self) -> [u8; 4] {
        let c = self.clamped();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            255,
        ]
    }

    /// True if every channel already lies in [0, 1].
    pub fn in_gamut(self) -> bool {
        (0.0..=1.0).contains(&self.r)
            && (0.0..=1.0).contains(&self.g)
            && (0.0..=1.0).contains(&self.b)
    }
}

/// A categorical color lookup table for integer labels.
///
/// Row 0 is reserved for background (black by convention); label value `v`
/// maps to row `v`. Lookups past the end clamp to the last row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTable {
    colors: Vec<Rgb>,
}

impl ColorTable {
    /// Build a table from explicit rows.
    ///
    /// Returns `None` for an empty row list; a usable table always has at
    /// least the background row.
    pub fn new(colors: Vec<Rgb>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// Build a table with a black background row followed by `colors`.
    pub fn with_background(colors: Vec<Rgb>) -> Self {
        let mut rows = Vec::with_capacity(colors.len() + 1);
        rows.push(Rgb::black());
        rows.extend(colors);
        Self { colors: rows }
    }

    /// Number of rows, background included.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for a label value. Values past the end clamp to the last row.
    pub fn color(&self, label: u32) -> Rgb {
        let idx = (label as usize).min(self.colors.len() - 1);
        self.colors[idx]
    }

    pub fn rows(&self) -> &[Rgb] {
        &self.colors
    }

    /// Load a table from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}

//! Cubehelix sequential colormap.
//!
//! Implements the helix scheme of Green (2011): a path through RGB space
//! that spirals around the gray diagonal from black to white, so brightness
//! increases monotonically and the map survives grayscale reproduction.

use quicklook_common::Rgb;
use serde::{Deserialize, Serialize};

/// Cubehelix colormap parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cubehelix {
    /// Starting hue angle, in thirds of a revolution (0 = blue, 1 = red,
    /// 2 = green).
    pub start: f32,
    /// Number of revolutions over the full range. Negative rotates
    /// blue -> green -> red.
    pub rotations: f32,
    /// Hue saturation. 0 gives pure grayscale.
    pub hue: f32,
    /// Gamma applied to the intensity ramp before coloring.
    pub gamma: f32,
}

impl Default for Cubehelix {
    fn default() -> Self {
        Self {
            start: 0.5,
            rotations: -1.5,
            hue: 1.0,
            gamma: 1.0,
        }
    }
}

impl Cubehelix {
    /// Sample the colormap at `t` in [0, 1]. Out-of-range input clamps.
    ///
    /// `sample(0.0)` is black and `sample(1.0)` is white for every
    /// parameter choice.
    pub fn sample(&self, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let l = t.powf(self.gamma);

        let phi = 2.0 * std::f32::consts::PI * (self.start / 3.0 + self.rotations * t);
        let amp = self.hue * l * (1.0 - l) / 2.0;
        let (sin_phi, cos_phi) = phi.sin_cos();

        // Channel coefficients from Green (2011), eq. 2.
        let r = l + amp * (-0.14861 * cos_phi + 1.78277 * sin_phi);
        let g = l + amp * (-0.29227 * cos_phi - 0.90649 * sin_phi);
        let b = l + amp * (1.97294 * cos_phi);

        Rgb::new(r, g, b).clamped()
    }
}

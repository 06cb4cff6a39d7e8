//! Categorical color tables for segmentation labels.
//!
//! Colors are drawn from an injected random source so callers control
//! determinism; seed a `StdRng` for reproducible tables. Row 0 is always
//! background black.

use palette::{FromColor, Lab, Srgb};
use quicklook_common::{ColorTable, Rgb};
use rand::Rng;

/// How random label colors are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSampling {
    /// Uniform draws in RGB [0, 1]^3.
    Uniform,
    /// Uniform draws remapped into the CIELAB gamut and converted to sRGB.
    ///
    /// Distances in L*a*b* approximate perceived difference, so tables
    /// sampled here look more distinct than raw RGB draws. Converted
    /// channels may leave [0, 1] and are clipped, not rejected.
    PerceptualLab,
}

/// L*, a*, b* ranges approximating the displayable gamut.
const LAB_L: (f32, f32) = (20.0, 80.0);
const LAB_A: (f32, f32) = (-85.0, 100.0);
const LAB_B: (f32, f32) = (-106.0, 92.0);

/// Build a categorical color table for labels in `0..=max_label`.
///
/// The table has `max_label + 1` rows: index 0 is background black, each
/// label value indexes its own row directly.
pub fn label_color_table<R: Rng + ?Sized>(
    max_label: u32,
    sampling: ColorSampling,
    rng: &mut R,
) -> ColorTable {
    let colors = (0..max_label)
        .map(|_| match sampling {
            ColorSampling::Uniform => Rgb::new(rng.gen(), rng.gen(), rng.gen()),
            ColorSampling::PerceptualLab => lab_sample(rng.gen(), rng.gen(), rng.gen()),
        })
        .collect();
    ColorTable::with_background(colors)
}

/// Map three unit draws into the Lab gamut and convert to clipped sRGB.
fn lab_sample(u0: f32, u1: f32, u2: f32) -> Rgb {
    let l = LAB_L.0 + u0 * (LAB_L.1 - LAB_L.0);
    let a = LAB_A.0 + u1 * (LAB_A.1 - LAB_A.0);
    let b = LAB_B.0 + u2 * (LAB_B.1 - LAB_B.0);

    let srgb = Srgb::from_color(Lab::new(l, a, b));
    Rgb::new(srgb.red, srgb.green, srgb.blue).clamped()
}

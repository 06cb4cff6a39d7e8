//! Colormaps for quicklook display.
//!
//! Two families:
//! - `cubehelix`: a perceptually ordered sequential colormap for intensity
//!   data, monotonically increasing in brightness.
//! - `labels`: categorical color tables for segmentation labels, sampled
//!   from an injected random source.

pub mod cubehelix;
pub mod labels;

pub use cubehelix::Cubehelix;
pub use labels::{label_color_table, ColorSampling};

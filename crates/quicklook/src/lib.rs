//! Quick-look display of multi-dimensional scientific arrays.
//!
//! Four entry points, one rule: reduce the input to something 2-D by
//! repeatedly taking the middle cross-section of the leading axis, then
//! hand it to a renderer.
//!
//! - [`show_intensity`]: grayscale volumes through the cubehelix colormap
//! - [`show_vector`]: 1-D traces, folded into a grid when the length allows
//! - [`show_normalized`]: multichannel images, each channel stretched to [0, 1]
//! - [`show_labels`]: segmentation volumes through a random categorical table
//!
//! Rendering goes through the [`Renderer`] trait; [`RasterRenderer`]
//! rasterizes to RGBA [`Frame`]s that encode to PNG.

pub mod layout;
pub mod png;
pub mod reduce;
pub mod render;
pub mod show;

pub use quicklook_common::{ColorTable, DisplayError, DisplayResult, Rgb};
pub use render::{
    ColorMapping, Frame, Interpolation, RasterOptions, RasterRenderer, Renderer, SequenceStyle,
};
pub use show::{show_intensity, show_labels, show_normalized, show_vector};

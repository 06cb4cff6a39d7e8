//! Display façade: the four public entry points.
//!
//! Each function reduces its input to something a [`Renderer`] accepts and
//! returns the renderer's opaque display handle. For volumes the reduction
//! is the midline cross-section rule: an array of shape `(7, 512, 512)`
//! displays plane `im[3]`, shape `(4, 50, 50, 50)` displays `im[2][25]`.

use ndarray::{ArrayViewD, Axis, Ix1, Ix3};
use rand::Rng;
use tracing::{debug, warn};

use colormap::{label_color_table, ColorSampling, Cubehelix};
use quicklook_common::{DisplayError, DisplayResult};

use crate::layout::{plan_grid, reshape_rows, GridFallback, GridLayout};
use crate::reduce::{reduce_leading, reduce_to_plane};
use crate::render::{ColorMapping, Interpolation, Renderer};

/// Display an intensity array with the cubehelix colormap, nearest-neighbor.
///
/// Arrays of 3 or more dimensions reduce to their midline plane. 1-D input
/// is folded into a grid; lengths with no factorization degrade to a 1 x n
/// single-row image, which is still an image (compare [`show_vector`]).
pub fn show_intensity<R: Renderer>(
    renderer: &mut R,
    im: ArrayViewD<'_, f32>,
) -> DisplayResult<R::Output> {
    debug!(shape = ?im.shape(), "show_intensity");
    let cmap = Cubehelix::default();
    let mapping = ColorMapping::Sequential(&cmap);

    if im.ndim() == 1 {
        let values = im
            .into_dimensionality::<Ix1>()
            .map_err(|e| DisplayError::invalid(e.to_string()))?;
        let (rows, cols) = match plan_grid(values.len(), GridFallback::RowImage)? {
            GridLayout::Plane { rows, cols } => (rows, cols),
            GridLayout::Sequence => (1, values.len()),
        };
        let grid = reshape_rows(values, rows, cols)?;
        let plane = reduce_to_plane(grid.view().into_dyn())?;
        return renderer.image(plane, &mapping, Interpolation::Nearest);
    }

    let plane = reduce_to_plane(im)?;
    renderer.image(plane, &mapping, Interpolation::Nearest)
}

/// Display a 1-D vector, as an image when its length factorizes.
///
/// Factorizable lengths fold into a grid and render like
/// [`show_intensity`]. Lengths with no non-trivial factors (1, 2, 3,
/// primes) are plotted as a raw value sequence instead, deliberately not
/// an image, unlike the [`show_intensity`] fallback.
pub fn show_vector<R: Renderer>(
    renderer: &mut R,
    values: ArrayViewD<'_, f32>,
) -> DisplayResult<R::Output> {
    debug!(shape = ?values.shape(), "show_vector");
    let values = values.into_dimensionality::<Ix1>().map_err(|_| {
        DisplayError::invalid("show_vector takes 1-dimensional input")
    })?;

    match plan_grid(values.len(), GridFallback::Sequence)? {
        GridLayout::Plane { rows, cols } => {
            let grid = reshape_rows(values, rows, cols)?;
            let plane = reduce_to_plane(grid.view().into_dyn())?;
            let cmap = Cubehelix::default();
            renderer.image(plane, &ColorMapping::Sequential(&cmap), Interpolation::Nearest)
        }
        GridLayout::Sequence => {
            debug!(len = values.len(), "no grid factorization, plotting sequence");
            renderer.sequence(values)
        }
    }
}

/// Display a multichannel array as true color, normalizing each channel
/// independently to [0, 1].
///
/// The last axis indexes channels (3 = RGB, 4 = RGBA); per-channel minimum
/// and maximum are taken over all spatial axes. A constant channel has no
/// range to stretch: it is filled with zeros and a warning is logged, so
/// callers always get a finite frame back.
pub fn show_normalized<R: Renderer>(
    renderer: &mut R,
    im: ArrayViewD<'_, f32>,
) -> DisplayResult<R::Output> {
    debug!(shape = ?im.shape(), "show_normalized");
    let ndim = im.ndim();
    if ndim < 3 {
        return Err(DisplayError::invalid(format!(
            "multichannel display needs at least 3 dimensions, got {}",
            ndim
        )));
    }
    if im.shape().contains(&0) {
        return Err(DisplayError::invalid(format!(
            "empty array: shape {:?}",
            im.shape()
        )));
    }
    let channels = im.shape()[ndim - 1];
    if channels != 3 && channels != 4 {
        return Err(DisplayError::invalid(format!(
            "true-color display needs 3 or 4 channels, got {}",
            channels
        )));
    }

    let mut normalized = im.to_owned();
    for c in 0..channels {
        let mut channel = normalized.index_axis_mut(Axis(ndim - 1), c);
        let (min, max) = crate::render::value_range(channel.iter());
        let range = max - min;
        if !range.is_finite() || range <= f32::EPSILON {
            warn!(channel = c, "channel has no intensity range, filling with zeros");
            channel.fill(0.0);
        } else {
            channel.mapv_inplace(|v| (v - min) / range);
        }
    }

    let reduced = reduce_leading(normalized.view(), 3)?;
    let rgb = reduced
        .into_dimensionality::<Ix3>()
        .map_err(|e| DisplayError::invalid(e.to_string()))?;
    renderer.truecolor(rgb)
}

/// Display a label array with a random categorical color table.
///
/// The volume reduces to its midline plane first; the table is sized from
/// the plane's maximum label, with row 0 reserved for background black.
/// Colors come from the injected random source; seed it for reproducible
/// displays.
pub fn show_labels<R: Renderer, G: Rng + ?Sized>(
    renderer: &mut R,
    labels: ArrayViewD<'_, u32>,
    sampling: ColorSampling,
    rng: &mut G,
) -> DisplayResult<R::Output> {
    debug!(shape = ?labels.shape(), ?sampling, "show_labels");
    let plane = reduce_to_plane(labels)?;
    let max_label = plane.iter().copied().max().unwrap_or(0);
    let table = label_color_table(max_label, sampling, rng);
    renderer.indexed(plane, &table)
}

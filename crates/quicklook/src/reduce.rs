//! Midline dimensionality reduction.
//!
//! Collapses leading axes of an n-dimensional array by repeatedly taking
//! the cross-section at the middle index of axis 0, until the requested
//! dimensionality remains. Cross-sections are views: the input is borrowed,
//! never copied, and element values are selected exactly (no interpolation),
//! so the same code serves intensity and integer label arrays.

use ndarray::{ArrayView2, ArrayViewD, Axis, Ix2};
use quicklook_common::{DisplayError, DisplayResult};

/// Cross-section indices the reducer will select for `shape`, in order.
///
/// A pure function of shape, not values: `[7, 512, 512]` yields `[3]`,
/// `[4, 50, 50, 50]` yields `[2, 25]`, and anything already 2-D or lower
/// yields nothing.
pub fn midline_indices(shape: &[usize]) -> Vec<usize> {
    if shape.len() <= 2 {
        return Vec::new();
    }
    shape[..shape.len() - 2].iter().map(|&len| len / 2).collect()
}

/// Reduce `view` to `target_ndim` dimensions by midline cross-sections.
///
/// `target_ndim` must be at least 2; inputs with fewer than `target_ndim`
/// dimensions or any zero-length axis are rejected. An input already at the
/// target dimensionality is returned unchanged.
pub fn reduce_leading<T>(
    view: ArrayViewD<'_, T>,
    target_ndim: usize,
) -> DisplayResult<ArrayViewD<'_, T>> {
    debug_assert!(target_ndim >= 2);
    if view.ndim() < target_ndim {
        return Err(DisplayError::invalid(format!(
            "expected at least {} dimensions, got {}",
            target_ndim,
            view.ndim()
        )));
    }
    if view.shape().contains(&0) {
        return Err(DisplayError::invalid(format!(
            "empty array: shape {:?}",
            view.shape()
        )));
    }

    let mut view = view;
    while view.ndim() > target_ndim {
        let mid = view.len_of(Axis(0)) / 2;
        view = view.index_axis_move(Axis(0), mid);
    }
    Ok(view)
}

/// Reduce `view` to a 2-D plane by midline cross-sections.
///
/// The base case of the display pipeline: a 2-D input short-circuits and is
/// returned as-is. 1-D input is rejected here; the display façade routes
/// vectors through the grid planner instead.
pub fn reduce_to_plane<T>(view: ArrayViewD<'_, T>) -> DisplayResult<ArrayView2<'_, T>> {
    let plane = reduce_leading(view, 2)?;
    plane
        .into_dimensionality::<Ix2>()
        .map_err(|e| DisplayError::invalid(e.to_string()))
}

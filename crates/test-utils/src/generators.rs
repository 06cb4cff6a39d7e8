//! Test data generators for creating synthetic array data.
//!
//! These generators create predictable, verifiable value patterns that can
//! be used across the test suite.

use ndarray::{Array3, ArrayD};

/// Creates an n-dimensional volume with predictable values.
///
/// Each element's value is its row-major flat index, so tests can verify
/// which cross-section of a volume was selected by checking a single
/// element.
///
/// # Arguments
///
/// * `shape` - Axis lengths, leading axis first
///
/// # Example
///
/// ```
/// use test_utils::ramp_volume;
///
/// let vol = ramp_volume(&[2, 3, 4]);
/// assert_eq!(vol.shape(), &[2, 3, 4]);
/// assert_eq!(vol[[0, 0, 0]], 0.0);
/// assert_eq!(vol[[1, 0, 0]], 12.0); // second 3x4 slice starts at 12
/// ```
pub fn ramp_volume(shape: &[usize]) -> ArrayD<f32> {
    let len: usize = shape.iter().product();
    ArrayD::from_shape_vec(shape.to_vec(), (0..len).map(|i| i as f32).collect())
        .expect("shape matches value count")
}

/// Creates a label volume of vertical stripes.
///
/// The label of each element is `col / period`, so the first stripe is
/// background (label 0) and the maximum label is `(cols - 1) / period`.
///
/// # Arguments
///
/// * `shape` - Axis lengths; the last axis is the striped (column) axis
/// * `period` - Stripe width in columns
///
/// # Example
///
/// ```
/// use test_utils::striped_labels;
///
/// let labels = striped_labels(&[2, 6], 2);
/// assert_eq!(labels[[0, 0]], 0);
/// assert_eq!(labels[[0, 3]], 1);
/// assert_eq!(labels[[1, 5]], 2);
/// ```
pub fn striped_labels(shape: &[usize], period: usize) -> ArrayD<u32> {
    let cols = *shape.last().expect("shape must not be empty");
    let len: usize = shape.iter().product();
    let values = (0..len)
        .map(|i| ((i % cols) / period) as u32)
        .collect::<Vec<_>>();
    ArrayD::from_shape_vec(shape.to_vec(), values).expect("shape matches value count")
}

/// Creates a 3-channel plane exercising the normalization paths.
///
/// - channel 0: ramps linearly from 10.0 to 20.0 across columns
/// - channel 1: constant 5.0 (no intensity range)
/// - channel 2: ramps linearly from 0.0 to 1.0 down rows
///
/// # Example
///
/// ```
/// use test_utils::mixed_channel_plane;
///
/// let plane = mixed_channel_plane(4, 5);
/// assert_eq!(plane.shape(), &[4, 5, 3]);
/// assert_eq!(plane[[0, 0, 0]], 10.0);
/// assert_eq!(plane[[0, 4, 0]], 20.0);
/// assert_eq!(plane[[3, 2, 1]], 5.0);
/// ```
pub fn mixed_channel_plane(rows: usize, cols: usize) -> Array3<f32> {
    Array3::from_shape_fn((rows, cols, 3), |(row, col, channel)| match channel {
        0 => 10.0 + 10.0 * col as f32 / (cols - 1).max(1) as f32,
        1 => 5.0,
        _ => row as f32 / (rows - 1).max(1) as f32,
    })
}

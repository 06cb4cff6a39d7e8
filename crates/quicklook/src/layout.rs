//! Grid layout planning for 1-D data.
//!
//! A vector is displayable as an image when its length has a non-trivial
//! factorization; the planner picks a factor and the reshaper folds the
//! vector into a row-major grid. Lengths with no factors (1, 2, 3 and
//! primes) fall back per caller: either a degenerate single-row image or an
//! explicit sequence plot. The two fallbacks are intentionally different
//! behaviors, selected with [`GridFallback`].

use ndarray::{Array2, ArrayView1};
use quicklook_common::{DisplayError, DisplayResult};

/// All divisors `d` of `n` with `1 < d < n`, ascending.
///
/// Empty for 1, 2, 3 and primes. `n == 0` is rejected.
pub fn proper_factors(n: usize) -> DisplayResult<Vec<usize>> {
    if n == 0 {
        return Err(DisplayError::invalid("cannot factorize a zero length"));
    }
    Ok((2..n).filter(|d| n % d == 0).collect())
}

/// Fallback policy when a length has no non-trivial factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFallback {
    /// Degenerate 1 x n grid, still displayable as an image.
    RowImage,
    /// Plot the raw values as a sequence instead of an image.
    Sequence,
}

/// Planned arrangement for a 1-D input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLayout {
    /// Fold into a `rows` x `cols` row-major grid.
    Plane { rows: usize, cols: usize },
    /// No factorization; caller plots the raw sequence.
    Sequence,
}

/// Choose a 2-D arrangement for a vector of length `len`.
///
/// When factors exist, the middle one (`fs[fs.len() / 2]`) becomes the
/// column count: length 10 factors as `[2, 5]`, picks 5 and lays out
/// 2 x 5. Otherwise the result is the caller's fallback.
pub fn plan_grid(len: usize, fallback: GridFallback) -> DisplayResult<GridLayout> {
    let factors = proper_factors(len)?;
    if factors.is_empty() {
        return Ok(match fallback {
            GridFallback::RowImage => GridLayout::Plane { rows: 1, cols: len },
            GridFallback::Sequence => GridLayout::Sequence,
        });
    }
    let cols = factors[factors.len() / 2];
    Ok(GridLayout::Plane {
        rows: len / cols,
        cols,
    })
}

/// Fold a vector into a row-major `rows` x `cols` grid.
pub fn reshape_rows<T: Clone>(
    values: ArrayView1<'_, T>,
    rows: usize,
    cols: usize,
) -> DisplayResult<Array2<T>> {
    if rows * cols != values.len() {
        return Err(DisplayError::invalid(format!(
            "cannot reshape {} values into {} x {}",
            values.len(),
            rows,
            cols
        )));
    }
    values
        .to_owned()
        .into_shape_with_order((rows, cols))
        .map_err(|e| DisplayError::invalid(e.to_string()))
}

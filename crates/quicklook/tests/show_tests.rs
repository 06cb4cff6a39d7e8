//! End-to-end tests for the display façade.

use ndarray::{stack, Array1, Array3, ArrayView1, ArrayView2, ArrayView3, Axis};
use rand::rngs::StdRng;
use rand::SeedableRng;

use colormap::ColorSampling;
use quicklook::render::{ColorMapping, Interpolation};
use quicklook::{
    show_intensity, show_labels, show_normalized, show_vector, ColorTable, DisplayResult,
    RasterRenderer, Renderer,
};
use test_utils::{mixed_channel_plane, ramp_volume, striped_labels};

/// Renderer double recording which drawing path was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rendered {
    Image { rows: usize, cols: usize },
    Indexed { rows: usize, cols: usize, table_len: usize },
    Truecolor { rows: usize, cols: usize, channels: usize },
    Sequence { len: usize },
}

struct RecordingRenderer;

impl Renderer for RecordingRenderer {
    type Output = Rendered;

    fn image(
        &mut self,
        plane: ArrayView2<'_, f32>,
        _mapping: &ColorMapping<'_>,
        _interp: Interpolation,
    ) -> DisplayResult<Rendered> {
        let (rows, cols) = plane.dim();
        Ok(Rendered::Image { rows, cols })
    }

    fn indexed(
        &mut self,
        labels: ArrayView2<'_, u32>,
        table: &ColorTable,
    ) -> DisplayResult<Rendered> {
        let (rows, cols) = labels.dim();
        Ok(Rendered::Indexed {
            rows,
            cols,
            table_len: table.len(),
        })
    }

    fn truecolor(&mut self, pixels: ArrayView3<'_, f32>) -> DisplayResult<Rendered> {
        let (rows, cols, channels) = pixels.dim();
        Ok(Rendered::Truecolor {
            rows,
            cols,
            channels,
        })
    }

    fn sequence(&mut self, values: ArrayView1<'_, f32>) -> DisplayResult<Rendered> {
        Ok(Rendered::Sequence { len: values.len() })
    }
}

// ============================================================================
// show_intensity
// ============================================================================

#[test]
fn test_intensity_volume_reduces_to_midline_plane() {
    let vol = ramp_volume(&[7, 16, 16]);
    let mut renderer = RasterRenderer::new();
    let frame = show_intensity(&mut renderer, vol.view()).unwrap();

    assert_eq!((frame.width(), frame.height()), (16, 16));
    // The reduced plane is itself a ramp: min top-left, max bottom-right.
    assert_eq!(frame.pixel(0, 0), [0, 0, 0, 255]);
    assert_eq!(frame.pixel(15, 15), [255, 255, 255, 255]);
}

#[test]
fn test_intensity_2d_passes_through() {
    let plane = ramp_volume(&[4, 6]);
    let mut renderer = RecordingRenderer;
    let out = show_intensity(&mut renderer, plane.view()).unwrap();
    assert_eq!(out, Rendered::Image { rows: 4, cols: 6 });
}

#[test]
fn test_intensity_vector_folds_into_grid() {
    // 12 factors as [2, 3, 4, 6]; the middle factor 4 becomes the width.
    let v = Array1::from_iter((0..12).map(|i| i as f32)).into_dyn();
    let mut renderer = RecordingRenderer;
    let out = show_intensity(&mut renderer, v.view()).unwrap();
    assert_eq!(out, Rendered::Image { rows: 3, cols: 4 });
}

#[test]
fn test_intensity_prime_vector_degrades_to_row_image() {
    // Unlike show_vector, the intensity path still produces an image.
    let v = Array1::from_iter((0..7).map(|i| i as f32)).into_dyn();
    let mut renderer = RecordingRenderer;
    let out = show_intensity(&mut renderer, v.view()).unwrap();
    assert_eq!(out, Rendered::Image { rows: 1, cols: 7 });
}

#[test]
fn test_intensity_rejects_zero_dimensional() {
    let scalar = ramp_volume(&[]);
    let mut renderer = RecordingRenderer;
    assert!(show_intensity(&mut renderer, scalar.view()).is_err());
}

// ============================================================================
// show_vector
// ============================================================================

#[test]
fn test_vector_of_ten_renders_as_two_by_five_image() {
    let v = Array1::from_iter((0..10).map(|i| i as f32)).into_dyn();
    let mut renderer = RecordingRenderer;
    let out = show_vector(&mut renderer, v.view()).unwrap();
    assert_eq!(out, Rendered::Image { rows: 2, cols: 5 });
}

#[test]
fn test_prime_vector_plots_a_sequence_not_an_image() {
    let v = Array1::from_iter((0..7).map(|i| i as f32)).into_dyn();
    let mut renderer = RecordingRenderer;
    let out = show_vector(&mut renderer, v.view()).unwrap();
    assert_eq!(out, Rendered::Sequence { len: 7 });
}

#[test]
fn test_prime_vector_sequence_frame_dimensions() {
    let v = Array1::from_iter((0..7).map(|i| (i as f32).sin())).into_dyn();
    let mut renderer = RasterRenderer::new();
    let frame = show_vector(&mut renderer, v.view()).unwrap();
    assert_eq!(frame.width(), 7);
    assert!(frame.height() > 1);
}

#[test]
fn test_vector_rejects_higher_dimensions() {
    let plane = ramp_volume(&[3, 4]);
    let mut renderer = RecordingRenderer;
    assert!(show_vector(&mut renderer, plane.view()).is_err());
}

// ============================================================================
// show_normalized
// ============================================================================

#[test]
fn test_normalized_stretches_each_channel_independently() {
    let plane = mixed_channel_plane(4, 5);
    let mut renderer = RasterRenderer::new();
    let frame = show_normalized(&mut renderer, plane.view().into_dyn()).unwrap();

    assert_eq!((frame.width(), frame.height()), (5, 4));
    // Channel 0 ramps 10..20 across columns: red 0 at the left edge, 255 at
    // the right, regardless of the raw range.
    assert_eq!(frame.pixel(0, 0)[0], 0);
    assert_eq!(frame.pixel(4, 0)[0], 255);
    // Channel 2 ramps down rows.
    assert_eq!(frame.pixel(0, 3)[2], 255);
}

#[test]
fn test_normalized_constant_channel_becomes_zero() {
    // Channel 1 is constant 5.0: max == min. Policy: fill with zeros rather
    // than divide by zero.
    let plane = mixed_channel_plane(4, 5);
    let mut renderer = RasterRenderer::new();
    let frame = show_normalized(&mut renderer, plane.view().into_dyn()).unwrap();

    for y in 0..4 {
        for x in 0..5 {
            assert_eq!(frame.pixel(x, y)[1], 0, "green at ({}, {})", x, y);
        }
    }
}

#[test]
fn test_normalized_reduces_leading_axes() {
    let plane = mixed_channel_plane(4, 5);
    let vol = stack![Axis(0), plane.view(), plane.view(), plane.view()];
    let mut renderer = RecordingRenderer;
    let out = show_normalized(&mut renderer, vol.view().into_dyn()).unwrap();
    assert_eq!(
        out,
        Rendered::Truecolor {
            rows: 4,
            cols: 5,
            channels: 3
        }
    );
}

#[test]
fn test_normalized_rejects_wrong_shapes() {
    let mut renderer = RecordingRenderer;

    let flat = ramp_volume(&[4, 5]);
    assert!(show_normalized(&mut renderer, flat.view()).is_err());

    let two_channels = Array3::<f32>::zeros((4, 5, 2)).into_dyn();
    assert!(show_normalized(&mut renderer, two_channels.view()).is_err());
}

// ============================================================================
// show_labels
// ============================================================================

#[test]
fn test_labels_volume_renders_reduced_plane() {
    let labels = striped_labels(&[5, 6, 6], 2);
    let mut renderer = RecordingRenderer;
    let mut rng = StdRng::seed_from_u64(42);
    let out = show_labels(&mut renderer, labels.view(), ColorSampling::Uniform, &mut rng).unwrap();

    // Max label on the plane is 2, so the table holds background + 2 rows.
    assert_eq!(
        out,
        Rendered::Indexed {
            rows: 6,
            cols: 6,
            table_len: 3
        }
    );
}

#[test]
fn test_labels_background_is_black_and_regions_are_flat() {
    let labels = striped_labels(&[5, 6, 6], 2);
    let mut renderer = RasterRenderer::new();
    let mut rng = StdRng::seed_from_u64(42);
    let frame =
        show_labels(&mut renderer, labels.view(), ColorSampling::Uniform, &mut rng).unwrap();

    // Stripe 0 (columns 0-1) is background black.
    assert_eq!(frame.pixel(0, 0), [0, 0, 0, 255]);
    assert_eq!(frame.pixel(1, 5), [0, 0, 0, 255]);

    // Every pixel of a stripe shares one color; different stripes differ.
    let stripe1 = frame.pixel(2, 0);
    let stripe2 = frame.pixel(4, 0);
    for y in 0..6 {
        assert_eq!(frame.pixel(2, y), stripe1);
        assert_eq!(frame.pixel(3, y), stripe1);
        assert_eq!(frame.pixel(5, y), stripe2);
    }
    assert_ne!(stripe1, [0, 0, 0, 255]);
    assert_ne!(stripe1, stripe2);
}

#[test]
fn test_labels_seeded_rng_reproduces_the_frame() {
    let labels = striped_labels(&[3, 8, 8], 2);

    let mut renderer = RasterRenderer::new();
    let frame_a = show_labels(
        &mut renderer,
        labels.view(),
        ColorSampling::PerceptualLab,
        &mut StdRng::seed_from_u64(7),
    )
    .unwrap();
    let frame_b = show_labels(
        &mut renderer,
        labels.view(),
        ColorSampling::PerceptualLab,
        &mut StdRng::seed_from_u64(7),
    )
    .unwrap();

    assert_eq!(frame_a, frame_b);
}

#[test]
fn test_labels_reject_one_dimension() {
    let labels = ndarray::ArrayD::<u32>::zeros(ndarray::IxDyn(&[9]));
    let mut renderer = RecordingRenderer;
    let mut rng = StdRng::seed_from_u64(0);
    assert!(
        show_labels(&mut renderer, labels.view(), ColorSampling::Uniform, &mut rng).is_err()
    );
}

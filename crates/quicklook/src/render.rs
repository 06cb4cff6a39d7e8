//! The renderer boundary and the built-in raster backend.
//!
//! Display functions hand a final 2-D plane plus a color mapping to a
//! [`Renderer`]; what happens next (pixel buffers, a GUI canvas, a test
//! double) is the implementation's business. The crate ships
//! [`RasterRenderer`], which rasterizes to RGBA [`Frame`]s and is what the
//! integration tests and PNG output run through.

use ndarray::{Array2, ArrayView1, ArrayView2, ArrayView3};
use serde::{Deserialize, Serialize};

use colormap::Cubehelix;
use quicklook_common::{ColorTable, DisplayError, DisplayResult};

use crate::png;

/// Sampling mode when a plane is drawn at a different size than its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpolation {
    /// Exact-value display: every output pixel is one input cell. This is
    /// what the display façade always requests.
    Nearest,
    /// Bilinear resampling, for non-scientific consumers of the backend.
    Bilinear,
}

/// Color mapping for a scalar plane.
#[derive(Debug, Clone, Copy)]
pub enum ColorMapping<'a> {
    /// Continuous sequential colormap over the normalized value range.
    Sequential(&'a Cubehelix),
    /// Discrete table; normalized values quantize to the nearest row.
    Table(&'a ColorTable),
}

/// Rendering boundary for display results.
///
/// `Output` is the renderer's opaque display handle; the display functions
/// return it to the caller without inspecting it.
pub trait Renderer {
    type Output;

    /// Draw a scalar plane through a color mapping.
    fn image(
        &mut self,
        plane: ArrayView2<'_, f32>,
        mapping: &ColorMapping<'_>,
        interp: Interpolation,
    ) -> DisplayResult<Self::Output>;

    /// Draw an integer label plane through a categorical color table.
    /// Always nearest-neighbor; labels index table rows directly.
    fn indexed(
        &mut self,
        labels: ArrayView2<'_, u32>,
        table: &ColorTable,
    ) -> DisplayResult<Self::Output>;

    /// Draw a pre-normalized multichannel plane (rows x cols x 3-or-4,
    /// channels in [0, 1]) as true color.
    fn truecolor(&mut self, pixels: ArrayView3<'_, f32>) -> DisplayResult<Self::Output>;

    /// Plot raw values as a sequence. Explicitly not an image; this is the
    /// vector-display fallback for unfactorizable lengths.
    fn sequence(&mut self, values: ArrayView1<'_, f32>) -> DisplayResult<Self::Output>;
}

/// A rendered RGBA frame, the raster backend's display handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Frame {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * 4],
        }
    }

    fn from_raw(width: usize, height: usize, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width * height * 4);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes, row-major, 4 bytes per pixel.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGBA value at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    fn put(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let i = (y * self.width + x) * 4;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }

    /// Encode as PNG, indexed when few colors are present.
    pub fn to_png(&self) -> DisplayResult<Vec<u8>> {
        png::encode_auto(&self.pixels, self.width, self.height)
    }
}

/// Style for sequence plots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceStyle {
    /// Plot height in pixels.
    pub height: usize,
    /// Line width in pixels.
    pub line_width: f32,
    /// Line color [R, G, B, A].
    pub line_color: [u8; 4],
    /// Background color [R, G, B, A].
    pub background: [u8; 4],
}

impl Default for SequenceStyle {
    fn default() -> Self {
        Self {
            height: 120,
            line_width: 1.5,
            line_color: [32, 96, 160, 255],
            background: [255, 255, 255, 255],
        }
    }
}

/// Raster backend configuration, loadable from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterOptions {
    /// Integer upscale factor: each array cell becomes `scale` x `scale`
    /// output pixels.
    pub scale: usize,
    pub sequence: SequenceStyle,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1,
            sequence: SequenceStyle::default(),
        }
    }
}

impl RasterOptions {
    /// Load options from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}

/// CPU rasterizer producing RGBA [`Frame`]s.
#[derive(Debug, Clone, Default)]
pub struct RasterRenderer {
    options: RasterOptions,
}

impl RasterRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RasterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RasterOptions {
        &self.options
    }

    fn scale(&self) -> usize {
        self.options.scale.max(1)
    }
}

impl Renderer for RasterRenderer {
    type Output = Frame;

    fn image(
        &mut self,
        plane: ArrayView2<'_, f32>,
        mapping: &ColorMapping<'_>,
        interp: Interpolation,
    ) -> DisplayResult<Frame> {
        let (rows, cols) = plane.dim();
        if rows == 0 || cols == 0 {
            return Err(DisplayError::invalid("cannot render an empty plane"));
        }

        let scale = self.scale();
        let (out_h, out_w) = (rows * scale, cols * scale);
        let (min, max) = value_range(plane.iter());

        let resampled = match interp {
            Interpolation::Nearest => None,
            Interpolation::Bilinear => Some(resample_bilinear(plane, out_h, out_w)),
        };

        let mut frame = Frame::new(out_w, out_h);
        for y in 0..out_h {
            for x in 0..out_w {
                let value = match &resampled {
                    None => plane[[y / scale, x / scale]],
                    Some(r) => r[[y, x]],
                };
                let rgba = if value.is_nan() {
                    [0, 0, 0, 0]
                } else {
                    let t = normalize(value, min, max);
                    map_color(mapping, t)
                };
                frame.put(x, y, rgba);
            }
        }
        Ok(frame)
    }

    fn indexed(
        &mut self,
        labels: ArrayView2<'_, u32>,
        table: &ColorTable,
    ) -> DisplayResult<Frame> {
        let (rows, cols) = labels.dim();
        if rows == 0 || cols == 0 {
            return Err(DisplayError::invalid("cannot render an empty plane"));
        }

        let scale = self.scale();
        let mut frame = Frame::new(cols * scale, rows * scale);
        for y in 0..rows * scale {
            for x in 0..cols * scale {
                let label = labels[[y / scale, x / scale]];
                frame.put(x, y, table.color(label).to_rgba8());
            }
        }
        Ok(frame)
    }

    fn truecolor(&mut self, pixels: ArrayView3<'_, f32>) -> DisplayResult<Frame> {
        let (rows, cols, channels) = pixels.dim();
        if rows == 0 || cols == 0 {
            return Err(DisplayError::invalid("cannot render an empty plane"));
        }
        if channels != 3 && channels != 4 {
            return Err(DisplayError::invalid(format!(
                "true-color display needs 3 or 4 channels, got {}",
                channels
            )));
        }

        let scale = self.scale();
        let mut frame = Frame::new(cols * scale, rows * scale);
        for y in 0..rows * scale {
            for x in 0..cols * scale {
                let (sy, sx) = (y / scale, x / scale);
                let r = pixels[[sy, sx, 0]];
                let g = pixels[[sy, sx, 1]];
                let b = pixels[[sy, sx, 2]];
                let a = if channels == 4 { pixels[[sy, sx, 3]] } else { 1.0 };

                let rgba = if r.is_nan() || g.is_nan() || b.is_nan() || a.is_nan() {
                    [0, 0, 0, 0]
                } else {
                    [quantize(r), quantize(g), quantize(b), quantize(a)]
                };
                frame.put(x, y, rgba);
            }
        }
        Ok(frame)
    }

    fn sequence(&mut self, values: ArrayView1<'_, f32>) -> DisplayResult<Frame> {
        use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

        let n = values.len();
        if n == 0 {
            return Err(DisplayError::invalid("cannot plot an empty sequence"));
        }

        let style = self.options.sequence;
        let scale = self.scale();
        let width = n * scale;
        let height = style.height.max(2);

        let mut pixmap = Pixmap::new(width as u32, height as u32)
            .ok_or_else(|| DisplayError::Render("failed to allocate pixmap".into()))?;
        let [br, bg, bb, ba] = style.background;
        pixmap.fill(tiny_skia::Color::from_rgba8(br, bg, bb, ba));

        let (min, max) = value_range(values.iter());
        let pad = style.line_width.max(1.0);
        let span = height as f32 - 2.0 * pad;

        // One path, restarted across NaN gaps.
        let mut pb = PathBuilder::new();
        let mut started = false;
        for (i, &value) in values.iter().enumerate() {
            if value.is_nan() {
                started = false;
                continue;
            }
            let t = normalize(value, min, max);
            let x = (i as f32 + 0.5) * scale as f32;
            let y = pad + (1.0 - t) * span;
            if started {
                pb.line_to(x, y);
            } else {
                pb.move_to(x, y);
                started = true;
            }
        }

        if let Some(path) = pb.finish() {
            let mut paint = Paint::default();
            let [lr, lg, lb, la] = style.line_color;
            paint.set_color_rgba8(lr, lg, lb, la);
            paint.anti_alias = true;

            let mut stroke = Stroke::default();
            stroke.width = style.line_width;
            stroke.line_cap = LineCap::Round;
            stroke.line_join = LineJoin::Round;

            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }

        Ok(Frame::from_raw(width, height, pixmap.data().to_vec()))
    }
}

/// NaN-safe min/max of a value stream.
pub(crate) fn value_range<'a>(values: impl Iterator<Item = &'a f32>) -> (f32, f32) {
    values
        .filter(|v| !v.is_nan())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        })
}

/// Normalize `value` into [0, 1]; degenerate ranges map to the midpoint.
fn normalize(value: f32, min: f32, max: f32) -> f32 {
    let range = max - min;
    if !range.is_finite() || range <= f32::EPSILON {
        0.5
    } else {
        ((value - min) / range).clamp(0.0, 1.0)
    }
}

fn map_color(mapping: &ColorMapping<'_>, t: f32) -> [u8; 4] {
    match mapping {
        ColorMapping::Sequential(cmap) => cmap.sample(t).to_rgba8(),
        ColorMapping::Table(table) => {
            let row = (t * (table.len() - 1) as f32).round() as u32;
            table.color(row).to_rgba8()
        }
    }
}

fn quantize(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Bilinear resampling of a plane to a new resolution.
fn resample_bilinear(plane: ArrayView2<'_, f32>, dst_h: usize, dst_w: usize) -> Array2<f32> {
    let (src_h, src_w) = plane.dim();
    if src_h == dst_h && src_w == dst_w {
        return plane.to_owned();
    }

    let y_ratio = (src_h - 1) as f32 / (dst_h - 1).max(1) as f32;
    let x_ratio = (src_w - 1) as f32 / (dst_w - 1).max(1) as f32;

    Array2::from_shape_fn((dst_h, dst_w), |(y, x)| {
        let src_y = y as f32 * y_ratio;
        let src_x = x as f32 * x_ratio;

        let y1 = src_y.floor() as usize;
        let x1 = src_x.floor() as usize;
        let y2 = (y1 + 1).min(src_h - 1);
        let x2 = (x1 + 1).min(src_w - 1);

        let dy = src_y - y1 as f32;
        let dx = src_x - x1 as f32;

        let top = plane[[y1, x1]] * (1.0 - dx) + plane[[y1, x2]] * dx;
        let bottom = plane[[y2, x1]] * (1.0 - dx) + plane[[y2, x2]] * dx;
        top * (1.0 - dy) + bottom * dy
    })
}

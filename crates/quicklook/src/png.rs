//! PNG encoding for rendered frames.
//!
//! Two encoding modes:
//! - **Indexed PNG (color type 3)**: used when a frame has at most 256
//!   unique colors. This is the common case for categorical label displays,
//!   where the color table becomes the PLTE chunk almost verbatim.
//! - **RGBA PNG (color type 6)**: fallback for frames with more colors.
//!
//! `encode_auto` selects the mode from the pixel data. Encoding is strictly
//! sequential; the display pipeline is single-threaded by design.

use std::collections::HashMap;
use std::io::Write;

use quicklook_common::{DisplayError, DisplayResult};

/// Maximum colors for indexed PNG (PNG8).
const MAX_PALETTE_SIZE: usize = 256;

/// Encode RGBA pixel data, choosing indexed or full-color automatically.
///
/// # Arguments
/// - `pixels`: RGBA pixel data (4 bytes per pixel)
/// - `width`: image width in pixels
/// - `height`: image height in pixels
pub fn encode_auto(pixels: &[u8], width: usize, height: usize) -> DisplayResult<Vec<u8>> {
    check_dimensions(pixels, width, height)?;
    match extract_palette(pixels) {
        Some((palette, indices)) => encode_indexed(width, height, &palette, &indices),
        None => encode_rgba(pixels, width, height),
    }
}

/// Pack RGBA bytes into a u32 for fast hashing and comparison.
#[inline(always)]
fn pack_color(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((a as u32) << 24)
}

/// Collect the unique colors of `pixels` into a palette plus per-pixel
/// indices, or `None` once more than 256 colors are seen.
fn extract_palette(pixels: &[u8]) -> Option<(Vec<[u8; 4]>, Vec<u8>)> {
    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<[u8; 4]> = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices: Vec<u8> = Vec::with_capacity(pixels.len() / 4);

    for chunk in pixels.chunks_exact(4) {
        let packed = pack_color(chunk[0], chunk[1], chunk[2], chunk[3]);

        let index = match color_to_index.get(&packed) {
            Some(&idx) => idx,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push([chunk[0], chunk[1], chunk[2], chunk[3]]);
                color_to_index.insert(packed, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Encode an indexed PNG (color type 3) from a palette and indices.
///
/// One byte per pixel plus the PLTE chunk; a tRNS chunk is added only when
/// some palette entry is not fully opaque.
pub fn encode_indexed(
    width: usize,
    height: usize,
    palette: &[[u8; 4]],
    indices: &[u8],
) -> DisplayResult<Vec<u8>> {
    if palette.is_empty() || palette.len() > MAX_PALETTE_SIZE {
        return Err(DisplayError::invalid(format!(
            "palette must hold 1..=256 colors, got {}",
            palette.len()
        )));
    }
    if indices.len() != width * height {
        return Err(DisplayError::invalid(format!(
            "index buffer length {} does not match {} x {}",
            indices.len(),
            width,
            height
        )));
    }

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth (8 bits per palette index)
    ihdr_data.push(3); // color type 3 = indexed
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    let mut plte_data = Vec::with_capacity(palette.len() * 3);
    for [r, g, b, _] in palette {
        plte_data.push(*r);
        plte_data.push(*g);
        plte_data.push(*b);
    }
    write_chunk(&mut png, b"PLTE", &plte_data);

    let has_transparency = palette.iter().any(|[_, _, _, a]| *a < 255);
    if has_transparency {
        let trns_data: Vec<u8> = palette.iter().map(|[_, _, _, a]| *a).collect();
        write_chunk(&mut png, b"tRNS", &trns_data);
    }

    let idat_data = deflate_scanlines(indices, width)?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    write_chunk(&mut png, b"IEND", &[]);
    Ok(png)
}

/// Encode an RGBA PNG (color type 6).
pub fn encode_rgba(pixels: &[u8], width: usize, height: usize) -> DisplayResult<Vec<u8>> {
    check_dimensions(pixels, width, height)?;

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(6); // color type (RGBA)
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    let idat_data = deflate_scanlines(pixels, width * 4)?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    write_chunk(&mut png, b"IEND", &[]);
    Ok(png)
}

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

fn check_dimensions(pixels: &[u8], width: usize, height: usize) -> DisplayResult<()> {
    if width == 0 || height == 0 {
        return Err(DisplayError::invalid("image dimensions must be non-zero"));
    }
    if pixels.len() != width * height * 4 {
        return Err(DisplayError::invalid(format!(
            "pixel buffer length {} does not match {} x {} RGBA",
            pixels.len(),
            width,
            height
        )));
    }
    Ok(())
}

/// Write a PNG chunk: length, type, data, CRC.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let crc_data = [chunk_type.as_slice(), data].concat();
    let crc = crc32fast::hash(&crc_data);
    png.extend_from_slice(&crc.to_be_bytes());
}

/// Prefix each scanline with a filter byte (0 = none) and zlib-compress
/// the result for the IDAT chunk.
fn deflate_scanlines(data: &[u8], bytes_per_row: usize) -> DisplayResult<Vec<u8>> {
    let height = data.len() / bytes_per_row;
    let mut uncompressed = Vec::with_capacity(height * (1 + bytes_per_row));
    for row in data.chunks_exact(bytes_per_row) {
        uncompressed.push(0); // filter type: none
        uncompressed.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder
        .write_all(&uncompressed)
        .map_err(|e| DisplayError::Render(format!("IDAT compression failed: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| DisplayError::Render(format!("IDAT compression failed: {}", e)))
}

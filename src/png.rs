//! Minimal truecolour PNG encoder
//!
//! Produces the signature followed by exactly three chunks: `IHDR`, one
//! `IDAT` holding the zlib stream of filter-0 scanlines, and `IEND`.
//! No ancillary chunks are written, so the output is byte-for-byte
//! deterministic for a given image.

use crate::shield::raw_scanlines;
use anyhow::{Context, Result};
use crc32fast::Hasher;
use flate2::{write::ZlibEncoder, Compression};
use image::RgbImage;
use std::io::Write;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Largest chunk payload PNG allows (2^31 - 1)
pub const PNG_MAX_LEN: u32 = 0x7FFF_FFFF;

pub const BIT_DEPTH: u8 = 8;

/// Colour type 2: truecolour RGB without alpha
pub const COLOR_TYPE_RGB: u8 = 2;

/// CRC-32 (zip/gzip polynomial) over `bytes`
pub fn crc32(bytes: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(bytes);
    hasher.finalize()
}

/// Serializes one chunk: length, type tag, payload, CRC of tag and payload
pub fn encode_chunk(tag: &[u8; 4], payload: &[u8]) -> Result<Vec<u8>> {
    let length = u32::try_from(payload.len())
        .ok()
        .filter(|&len| len <= PNG_MAX_LEN)
        .with_context(|| {
            format!(
                "{} chunk payload of {} bytes exceeds the PNG limit",
                String::from_utf8_lossy(tag),
                payload.len()
            )
        })?;

    let mut hasher = Hasher::new();
    hasher.update(tag);
    hasher.update(payload);

    let mut chunk = Vec::with_capacity(payload.len() + 12);
    chunk.extend_from_slice(&length.to_be_bytes());
    chunk.extend_from_slice(tag);
    chunk.extend_from_slice(payload);
    chunk.extend_from_slice(&hasher.finalize().to_be_bytes());
    Ok(chunk)
}

/// Header payload: 8-bit RGB, compression method 0, filter method 0, no interlace
///
/// Filter method 0 is the only one PNG defines; every scanline written by
/// this encoder uses filter type 0 (None).
pub fn ihdr_payload(width: u32, height: u32) -> [u8; 13] {
    let mut payload = [0u8; 13];
    payload[0..4].copy_from_slice(&width.to_be_bytes());
    payload[4..8].copy_from_slice(&height.to_be_bytes());
    payload[8] = BIT_DEPTH;
    payload[9] = COLOR_TYPE_RGB;
    // compression, filter and interlace methods stay 0
    payload
}

/// Deflates the raw scanlines into a zlib stream at the best compression level
pub fn compress_scanlines(raw: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(raw)
        .context("Failed to compress image data")?;
    encoder.finish().context("Failed to finish zlib stream")
}

/// Encodes `image` as a complete PNG file held in memory
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        anyhow::bail!("Cannot encode an empty {}x{} image", width, height);
    }

    let ihdr = encode_chunk(b"IHDR", &ihdr_payload(width, height))?;
    let compressed = compress_scanlines(&raw_scanlines(image))?;
    let idat = encode_chunk(b"IDAT", &compressed)?;
    let iend = encode_chunk(b"IEND", &[])?;

    let mut png =
        Vec::with_capacity(PNG_SIGNATURE.len() + ihdr.len() + idat.len() + iend.len());
    png.extend_from_slice(&PNG_SIGNATURE);
    png.extend_from_slice(&ihdr);
    png.extend_from_slice(&idat);
    png.extend_from_slice(&iend);
    Ok(png)
}

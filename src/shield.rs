//! Procedural shield artwork
//!
//! The shield is a disc centred on the canvas, filled with a vertical purple
//! gradient and surrounded by a white background.

use image::{ImageBuffer, Rgb, RgbImage};

/// Background colour outside the shield
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Shield radius as a fraction of the canvas width
pub const SHIELD_RADIUS_RATIO: f64 = 0.4;

/// Returns the colour of the pixel at (`x`, `y`) on a `width` x `height` canvas
pub fn shield_pixel(x: u32, y: u32, width: u32, height: u32) -> Rgb<u8> {
    let center_x = i64::from(width / 2);
    let center_y = i64::from(height / 2);
    let dx = i64::from(x) - center_x;
    let dy = i64::from(y) - center_y;
    let distance = ((dx * dx + dy * dy) as f64).sqrt();

    if distance < f64::from(width) * SHIELD_RADIUS_RATIO {
        let t = f64::from(y) / f64::from(height);
        Rgb([
            gradient_channel(102.0 + t * 16.0),
            gradient_channel(126.0 - t * 16.0),
            gradient_channel(234.0 - t * 92.0),
        ])
    } else {
        BACKGROUND
    }
}

/// Truncates a gradient value to a channel byte.
/// The clamp never triggers for the shield coefficients while `t` is in [0, 1).
fn gradient_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Renders the whole shield icon
pub fn shield_image(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| shield_pixel(x, y, width, height))
}

/// Lays out the image as PNG scanlines using filter type 0 ("None")
///
/// Every row is one filter byte followed by the row's RGB bytes, rows in
/// top-to-bottom order.
pub fn raw_scanlines(image: &RgbImage) -> Vec<u8> {
    let row_len = image.width() as usize * 3;
    let mut raw = Vec::with_capacity(image.height() as usize * (row_len + 1));

    for row in image.as_raw().chunks_exact(row_len.max(1)) {
        raw.push(0);
        raw.extend_from_slice(row);
    }

    raw
}

//! Proportional downscaling and square canvas centering.

use image::{Rgba, RgbaImage, imageops, imageops::FilterType};

/// Downscaling filter for every resize step.
const FILTER: FilterType = FilterType::Lanczos3;

/// Target dimensions for fitting `(width, height)` into a `max_width × max_height` box.
///
/// Never upscales. Each side is `round(side × scale)` (half away from zero),
/// clamped to `1..=box side`, so the limiting side lands exactly on the box.
pub fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 || max_width == 0 || max_height == 0 {
        return (width.min(max_width), height.min(max_height));
    }
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let scale = (f64::from(max_width) / f64::from(width))
        .min(f64::from(max_height) / f64::from(height));

    let scaled = |side: u32, limit: u32| -> u32 {
        let value = (f64::from(side) * scale).round() as u32;
        value.clamp(1, limit)
    };

    (scaled(width, max_width), scaled(height, max_height))
}

/// Shrink an image to fit the box, preserving aspect ratio.
///
/// Images that already fit are returned as-is.
pub fn thumbnail(img: RgbaImage, max_width: u32, max_height: u32) -> RgbaImage {
    let (width, height) = img.dimensions();
    let (new_width, new_height) = fit_dimensions(width, height, max_width, max_height);
    if (new_width, new_height) == (width, height) {
        return img;
    }
    imageops::resize(&img, new_width, new_height, FILTER)
}

/// Paste `img` centered on a transparent `size × size` canvas.
///
/// Offsets are `floor((size - side) / 2)`; oversized images are clipped.
pub fn center_on_square(img: &RgbaImage, size: u32) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let x = size.saturating_sub(img.width()) / 2;
    let y = size.saturating_sub(img.height()) / 2;
    imageops::replace(&mut canvas, img, i64::from(x), i64::from(y));
    canvas
}

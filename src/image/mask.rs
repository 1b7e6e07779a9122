//! Rounded-corner alpha masks.

use image::{GrayImage, Luma, RgbaImage, imageops};
use serde::Deserialize;

/// Samples per axis when estimating edge coverage.
const SUPERSAMPLE: u32 = 4;
const SAMPLE_COUNT: u32 = SUPERSAMPLE * SUPERSAMPLE;

/// How the mask is combined with the source alpha.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskMode {
    /// Output alpha is the mask value.
    #[default]
    Replace,
    /// Output alpha is source alpha scaled by the mask.
    Multiply,
}

/// Corner radius in pixels: `min(width, height) * percent / 100`.
pub const fn corner_radius(width: u32, height: u32, percent: u32) -> u32 {
    let shorter = if width < height { width } else { height };
    shorter * percent / 100
}

/// Build an anti-aliased rounded rectangle mask covering the whole image.
///
/// The radius is clamped to half the shorter side.
pub fn rounded_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    let radius = radius.min(width.min(height) / 2);
    let mut mask = GrayImage::from_pixel(width, height, Luma([255]));
    if radius == 0 {
        return mask;
    }

    let r = f64::from(radius);
    let r_sq = r * r;
    let corners = [
        (0, 0, r, r),
        (width - radius, 0, f64::from(width) - r, r),
        (0, height - radius, r, f64::from(height) - r),
        (
            width - radius,
            height - radius,
            f64::from(width) - r,
            f64::from(height) - r,
        ),
    ];

    for (x0, y0, cx, cy) in corners {
        for y in y0..y0 + radius {
            for x in x0..x0 + radius {
                let covered = coverage(x, y, cx, cy, r_sq);
                mask.put_pixel(x, y, Luma([covered]));
            }
        }
    }

    // Outermost pixels lie outside the arc at any radius, however coarse the sampling.
    for (x, y) in [(0, 0), (width - 1, 0), (0, height - 1), (width - 1, height - 1)] {
        mask.put_pixel(x, y, Luma([0]));
    }

    mask
}

/// Fraction of the pixel inside the circle, scaled to 0..=255.
#[inline]
fn coverage(x: u32, y: u32, cx: f64, cy: f64, r_sq: f64) -> u8 {
    let step = 1.0 / f64::from(SUPERSAMPLE);
    let mut inside = 0_u32;

    for sy in 0..SUPERSAMPLE {
        let py = f64::from(y) + (f64::from(sy) + 0.5) * step - cy;
        for sx in 0..SUPERSAMPLE {
            let px = f64::from(x) + (f64::from(sx) + 0.5) * step - cx;
            if px * px + py * py <= r_sq {
                inside += 1;
            }
        }
    }

    ((inside * 255 + SAMPLE_COUNT / 2) / SAMPLE_COUNT) as u8
}

/// Round the corners of an image.
///
/// The source is pasted onto a fresh transparent buffer and its alpha is
/// then combined with a rounded mask whose radius is `percent` of the
/// shorter side.
pub fn round_corners(img: &RgbaImage, percent: u32, mode: MaskMode) -> RgbaImage {
    let (width, height) = img.dimensions();
    let mask = rounded_mask(width, height, corner_radius(width, height, percent));

    let mut output = RgbaImage::new(width, height);
    imageops::replace(&mut output, img, 0, 0);

    for (pixel, m) in output.pixels_mut().zip(mask.pixels()) {
        pixel[3] = match mode {
            MaskMode::Replace => m[0],
            MaskMode::Multiply => ((u16::from(pixel[3]) * u16::from(m[0]) + 127) / 255) as u8,
        };
    }

    output
}

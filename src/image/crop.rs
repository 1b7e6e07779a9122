//! Crop to the bounding box of visible content.

use image::{RgbaImage, imageops};

/// Inclusive pixel bounds of non-transparent content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Bounds {
    pub const fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    pub const fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }
}

/// Smallest rectangle containing every pixel with alpha > 0.
///
/// Returns `None` if the image is fully transparent (or empty).
pub fn content_bounds(img: &RgbaImage) -> Option<Bounds> {
    let mut bounds: Option<Bounds> = None;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        match bounds.as_mut() {
            Some(b) => {
                b.left = b.left.min(x);
                b.right = b.right.max(x);
                // Rows are visited top to bottom.
                b.bottom = y;
            }
            None => {
                bounds = Some(Bounds {
                    left: x,
                    top: y,
                    right: x,
                    bottom: y,
                })
            }
        }
    }

    bounds
}

/// Crop away transparent margins.
///
/// A fully transparent image is returned unchanged.
pub fn crop_to_content(img: RgbaImage) -> RgbaImage {
    match content_bounds(&img) {
        Some(b) if b.width() != img.width() || b.height() != img.height() => {
            imageops::crop_imm(&img, b.left, b.top, b.width(), b.height()).to_image()
        }
        _ => img,
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::{Bounds, content_bounds, crop_to_content};

    const CLEAR: Rgba<u8> = Rgba([255, 255, 255, 0]);
    const INK: Rgba<u8> = Rgba([20, 40, 60, 255]);

    #[test]
    fn finds_bounds_of_scattered_pixels() {
        let mut img = RgbaImage::from_pixel(10, 8, CLEAR);
        img.put_pixel(3, 2, INK);
        img.put_pixel(7, 5, Rgba([0, 0, 0, 1]));
        img.put_pixel(1, 4, INK);

        assert_eq!(
            content_bounds(&img),
            Some(Bounds {
                left: 1,
                top: 2,
                right: 7,
                bottom: 5,
            })
        );
    }

    #[test]
    fn fully_transparent_has_no_bounds() {
        let img = RgbaImage::from_pixel(4, 4, CLEAR);
        assert_eq!(content_bounds(&img), None);
        assert_eq!(content_bounds(&RgbaImage::new(0, 0)), None);
    }

    #[test]
    fn crop_is_noop_when_fully_transparent() {
        let img = RgbaImage::from_pixel(5, 3, CLEAR);
        let out = crop_to_content(img.clone());
        assert_eq!(out, img);
    }

    #[test]
    fn cropped_content_touches_every_edge() {
        let mut img = RgbaImage::from_pixel(20, 20, CLEAR);
        for y in 4..=11 {
            for x in 6..=15 {
                if (x + y) % 3 != 0 {
                    img.put_pixel(x, y, INK);
                }
            }
        }

        let out = crop_to_content(img);

        assert_eq!(out.dimensions(), (10, 8));
        let b = content_bounds(&out).unwrap();
        assert_eq!((b.left, b.top), (0, 0));
        assert_eq!((b.right, b.bottom), (out.width() - 1, out.height() - 1));
    }

    #[test]
    fn crop_keeps_pixel_values() {
        let mut img = RgbaImage::from_pixel(6, 6, CLEAR);
        img.put_pixel(2, 3, INK);

        let out = crop_to_content(img);

        assert_eq!(out.dimensions(), (1, 1));
        assert_eq!(*out.get_pixel(0, 0), INK);
    }
}

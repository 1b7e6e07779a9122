//! Near-white keying.
//!
//! Pixels whose RGB channels all exceed the threshold are treated as
//! background and replaced with transparent white.

use image::{Rgba, RgbaImage};

/// Replacement for keyed pixels.
const KEYED: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Key out near-white pixels in place. Returns the number of keyed pixels.
pub fn key_near_white(img: &mut RgbaImage, threshold: u8) -> usize {
    let mut keyed = 0;
    for pixel in img.pixels_mut() {
        if is_near_white(pixel, threshold) {
            *pixel = KEYED;
            keyed += 1;
        }
    }
    keyed
}

#[inline]
fn is_near_white(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, _] = pixel.0;
    r > threshold && g > threshold && b > threshold
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::key_near_white;

    #[test]
    fn keys_near_white_to_transparent_white() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([250, 245, 241, 255]));
        let keyed = key_near_white(&mut img, 240);

        assert_eq!(keyed, 4);
        for pixel in img.pixels() {
            assert_eq!(*pixel, Rgba([255, 255, 255, 0]));
        }
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([240, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([255, 240, 255, 200]));
        img.put_pixel(2, 0, Rgba([241, 241, 241, 17]));

        let keyed = key_near_white(&mut img, 240);

        assert_eq!(keyed, 1);
        assert_eq!(*img.get_pixel(0, 0), Rgba([240, 255, 255, 255]));
        assert_eq!(*img.get_pixel(1, 0), Rgba([255, 240, 255, 200]));
        assert_eq!(*img.get_pixel(2, 0), Rgba([255, 255, 255, 0]));
    }

    #[test]
    fn leaves_colored_pixels_untouched() {
        let original = RgbaImage::from_fn(16, 16, |x, y| {
            Rgba([(x * 15) as u8, (y * 15) as u8, 90, (x * y) as u8])
        });
        let mut img = original.clone();

        assert_eq!(key_near_white(&mut img, 240), 0);
        assert_eq!(img, original);
    }

    #[test]
    fn handles_empty_image() {
        let mut img = RgbaImage::new(0, 0);
        assert_eq!(key_near_white(&mut img, 240), 0);
    }
}

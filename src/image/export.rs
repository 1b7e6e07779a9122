//! Favicon export pipeline.
//!
//! ```text
//! load → RGBA → key near-white → crop ─┬─ thumbnail → center → round corners → apple-touch-icon.png
//!                                      └─ thumbnail 48 → save → thumbnail 32 → save → thumbnail 16 → save
//! ```
//!
//! The favicon chain shrinks the same running image, so every size is derived
//! from the previous one. Each write is independent; a failed write aborts the
//! run without touching files already written.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};

use crate::config::{AppleConfig, FaviconConfig, IconConfig};
use crate::debug;
use crate::image::crop::{content_bounds, crop_to_content};
use crate::image::key::key_near_white;
use crate::image::mask::round_corners;
use crate::image::resize::{center_on_square, thumbnail};

/// Which branch of the pipeline produced a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Favicon,
    AppleTouch,
}

impl ExportKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Favicon => "favicon",
            Self::AppleTouch => "apple",
        }
    }
}

/// One written PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exported {
    pub kind: ExportKind,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Summary of a pipeline run.
#[derive(Debug, Default)]
pub struct Report {
    /// Source dimensions as loaded.
    pub source: (u32, u32),
    /// Pixels made transparent by keying.
    pub keyed: usize,
    /// Source dimensions after cropping.
    pub cropped: (u32, u32),
    /// Files in write order.
    pub files: Vec<Exported>,
}

/// Run the whole pipeline, calling `on_export` after each file is written.
pub fn generate(config: &IconConfig, mut on_export: impl FnMut(&Exported)) -> Result<Report> {
    let source = load_source(config.source_path())?;
    let dimensions = source.dimensions();
    let (content, keyed) = prepare(source, config.key.threshold);

    let out_dir = config.output_dir();
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory `{}`", out_dir.display()))?;

    let mut report = Report {
        source: dimensions,
        keyed,
        cropped: content.dimensions(),
        files: Vec::new(),
    };
    let mut record = |exported: Exported| {
        on_export(&exported);
        report.files.push(exported);
    };

    if config.apple.enable {
        record(export_apple_touch(&content, &config.apple, out_dir)?);
    }
    export_favicons(content, &config.favicon, out_dir, &mut record)?;

    Ok(report)
}

/// Open the source image and normalize it to RGBA.
pub fn load_source(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to open source image `{}`", path.display()))?;
    Ok(img.to_rgba8())
}

/// Key near-white pixels and crop to the remaining content.
///
/// Returns the cropped image and the number of keyed pixels.
pub fn prepare(mut img: RgbaImage, threshold: u8) -> (RgbaImage, usize) {
    let keyed = key_near_white(&mut img, threshold);
    if content_bounds(&img).is_none() {
        debug!("crop"; "image is fully transparent, skipping crop");
    }
    (crop_to_content(img), keyed)
}

/// Write the favicon chain, shrinking the running image at every step.
pub fn export_favicons(
    img: RgbaImage,
    favicon: &FaviconConfig,
    out_dir: &Path,
    mut on_export: impl FnMut(Exported),
) -> Result<()> {
    let mut current = img;
    for &size in &favicon.sizes {
        current = thumbnail(current, size, size);
        let path = out_dir.join(favicon.file_name(size));
        let exported = if favicon.square {
            save_png(&center_on_square(&current, size), &path, ExportKind::Favicon)?
        } else {
            save_png(&current, &path, ExportKind::Favicon)?
        };
        on_export(exported);
    }
    Ok(())
}

/// Write the rounded Apple touch icon.
pub fn export_apple_touch(img: &RgbaImage, apple: &AppleConfig, out_dir: &Path) -> Result<Exported> {
    let resized = thumbnail(img.clone(), apple.size, apple.size);
    let canvas = center_on_square(&resized, apple.size);
    let icon = round_corners(&canvas, apple.radius_percent, apple.mask);
    save_png(&icon, &out_dir.join(&apple.filename), ExportKind::AppleTouch)
}

fn save_png(img: &RgbaImage, path: &Path, kind: ExportKind) -> Result<Exported> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to write `{}`", path.display()))?;
    Ok(Exported {
        kind,
        path: path.to_path_buf(),
        width: img.width(),
        height: img.height(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::TempDir;

    use super::{ExportKind, generate, prepare};
    use crate::config::IconConfig;
    use crate::image::MaskMode;

    const BLUE: Rgb<u8> = Rgb([30, 90, 200]);

    /// 500x500 JPEG: 50px pure white border around a 400x400 colored square.
    fn write_bordered_jpeg(path: &Path) {
        let img = RgbImage::from_fn(500, 500, |x, y| {
            if (50..450).contains(&x) && (50..450).contains(&y) {
                BLUE
            } else {
                Rgb([255, 255, 255])
            }
        });
        img.save(path).unwrap();
    }

    fn config_in(dir: &TempDir) -> IconConfig {
        IconConfig {
            source: dir.path().join("favicon.jpg"),
            output: dir.path().join("public"),
            ..Default::default()
        }
    }

    fn open(path: &Path) -> RgbaImage {
        image::open(path).unwrap().to_rgba8()
    }

    #[test]
    fn generates_all_variants_from_bordered_jpeg() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        write_bordered_jpeg(&config.source);

        let mut seen = Vec::new();
        let report = generate(&config, |e| seen.push(e.kind)).unwrap();

        assert_eq!(report.files.len(), 4);
        assert_eq!(
            seen,
            [
                ExportKind::AppleTouch,
                ExportKind::Favicon,
                ExportKind::Favicon,
                ExportKind::Favicon,
            ]
        );
        assert!(report.keyed > 0);
        let (cw, ch) = report.cropped;
        assert!((400..=410).contains(&cw) && (400..=410).contains(&ch));

        let out = config.output_dir();
        for size in [48, 32, 16] {
            let icon = open(&out.join(format!("favicon-{size}.png")));
            assert_eq!(icon.dimensions(), (size, size));
            assert_eq!(icon.get_pixel(size / 2, size / 2)[3], 255);
        }

        let apple = open(&out.join("apple-touch-icon.png"));
        assert_eq!(apple.dimensions(), (180, 180));
        assert_eq!(apple.get_pixel(90, 90)[3], 255);
        for (x, y) in [(0, 0), (179, 0), (0, 179), (179, 179)] {
            assert_eq!(apple.get_pixel(x, y)[3], 0, "corner ({x},{y})");
        }
        // 22% of 180 = 39px radius; the straight edge between corners is opaque.
        assert_eq!(apple.get_pixel(90, 0)[3], 255);
    }

    #[test]
    fn apple_icon_can_be_disabled() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.apple.enable = false;
        write_bordered_jpeg(&config.source);

        let report = generate(&config, |_| {}).unwrap();

        assert_eq!(report.files.len(), 3);
        assert!(!config.output_dir().join("apple-touch-icon.png").exists());
    }

    #[test]
    fn non_square_content_keeps_aspect_unless_squared() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        let wide = RgbaImage::from_pixel(200, 100, Rgba([200, 20, 20, 255]));
        wide.save(dir.path().join("wide.png")).unwrap();
        config.source = dir.path().join("wide.png");
        config.apple.mask = MaskMode::Multiply;

        generate(&config, |_| {}).unwrap();
        let out = config.output_dir().to_path_buf();
        assert_eq!(open(&out.join("favicon-48.png")).dimensions(), (48, 24));
        assert_eq!(open(&out.join("favicon-16.png")).dimensions(), (16, 8));

        // Multiply keeps the padding above and below the content transparent.
        let apple = open(&out.join("apple-touch-icon.png"));
        assert_eq!(apple.dimensions(), (180, 180));
        assert_eq!(apple.get_pixel(90, 10)[3], 0);
        assert_eq!(apple.get_pixel(90, 90)[3], 255);

        config.favicon.square = true;
        generate(&config, |_| {}).unwrap();
        let squared = open(&out.join("favicon-48.png"));
        assert_eq!(squared.dimensions(), (48, 48));
        assert_eq!(squared.get_pixel(24, 2)[3], 0);
        assert_eq!(squared.get_pixel(24, 24)[3], 255);
    }

    #[test]
    fn fully_white_source_is_left_uncropped() {
        let img = RgbaImage::from_pixel(30, 20, Rgba([255, 255, 255, 255]));
        let (out, keyed) = prepare(img, 240);

        assert_eq!(keyed, 600);
        assert_eq!(out.dimensions(), (30, 20));
        assert!(out.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn missing_source_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let err = generate(&config, |_| {}).unwrap_err();
        assert!(format!("{err}").contains("favicon.jpg"));
        assert!(!config.output_dir().exists());
    }

    #[test]
    fn corrupt_source_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(&config.source, b"definitely not a jpeg").unwrap();

        assert!(generate(&config, |_| {}).is_err());
    }

    #[test]
    fn unwritable_output_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        write_bordered_jpeg(&config.source);
        // A file where the output directory should be.
        fs::write(config.output_dir(), b"").unwrap();

        let err = generate(&config, |_| {}).unwrap_err();
        assert!(format!("{err}").contains("output directory"));
    }
}

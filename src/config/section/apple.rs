//! `[apple]` section configuration.
//!
//! Controls the rounded Apple touch icon.
//!
//! # Example
//!
//! ```toml
//! [apple]
//! enable = true
//! size = 180                        # canvas edge length
//! radius_percent = 22               # corner radius, percent of the shorter side
//! mask = "replace"                  # "replace" or "multiply"
//! filename = "apple-touch-icon.png"
//! ```
//!
//! `mask = "replace"` sets the icon alpha to the rounded mask, so padding
//! around non-square content becomes opaque. `mask = "multiply"` keeps it
//! transparent.

use serde::Deserialize;

use super::validate_file_name;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::image::MaskMode;

const SIZE: FieldPath = FieldPath::new("apple.size");
const RADIUS_PERCENT: FieldPath = FieldPath::new("apple.radius_percent");
const FILENAME: FieldPath = FieldPath::new("apple.filename");

/// Largest meaningful radius; beyond half the side the corners overlap.
const MAX_RADIUS_PERCENT: u32 = 50;

/// Apple touch icon settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppleConfig {
    /// Generate the icon.
    pub enable: bool,

    /// Canvas edge length in pixels.
    pub size: u32,

    /// Corner radius as a percentage of the shorter side.
    pub radius_percent: u32,

    /// How the rounded mask combines with the image alpha.
    pub mask: MaskMode,

    /// Output file name.
    pub filename: String,
}

impl Default for AppleConfig {
    fn default() -> Self {
        Self {
            enable: true,
            size: 180,
            radius_percent: 22,
            mask: MaskMode::Replace,
            filename: "apple-touch-icon.png".into(),
        }
    }
}

impl AppleConfig {
    /// Validate Apple touch icon configuration (skipped when disabled).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }

        if self.size == 0 {
            diag.error(SIZE, format!("{SIZE} must be greater than 0"));
        }

        if self.radius_percent > MAX_RADIUS_PERCENT {
            diag.error_with_hint(
                RADIUS_PERCENT,
                format!(
                    "{RADIUS_PERCENT} must be at most {MAX_RADIUS_PERCENT}, got {}",
                    self.radius_percent
                ),
                format!("{MAX_RADIUS_PERCENT} already gives a full circle"),
            );
        }

        validate_file_name(&self.filename, FILENAME, diag);
    }
}

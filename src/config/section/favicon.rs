//! `[favicon]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [favicon]
//! sizes = [48, 32, 16]   # each size shrinks the previous result
//! prefix = "favicon"     # writes favicon-48.png, favicon-32.png, ...
//! square = false         # pad non-square content onto a square canvas
//! ```

use serde::Deserialize;

use super::validate_file_name;
use crate::config::{ConfigDiagnostics, FieldPath};

const SIZES: FieldPath = FieldPath::new("favicon.sizes");
const PREFIX: FieldPath = FieldPath::new("favicon.prefix");

/// Favicon variant settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FaviconConfig {
    /// Target edge lengths, largest first.
    pub sizes: Vec<u32>,

    /// File name prefix; files are written as `{prefix}-{size}.png`.
    pub prefix: String,

    /// Center each variant on a transparent `size × size` canvas.
    pub square: bool,
}

impl Default for FaviconConfig {
    fn default() -> Self {
        Self {
            sizes: vec![48, 32, 16],
            prefix: "favicon".into(),
            square: false,
        }
    }
}

impl FaviconConfig {
    /// Output file name for one size.
    pub fn file_name(&self, size: u32) -> String {
        format!("{}-{size}.png", self.prefix)
    }

    /// Validate favicon configuration.
    ///
    /// # Checks
    /// - `sizes` is non-empty, every size is positive
    /// - `sizes` is strictly descending, since each step shrinks the previous one
    /// - `prefix` is a bare file name
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.sizes.is_empty() {
            diag.error(SIZES, format!("{SIZES} must not be empty"));
        } else if self.sizes.contains(&0) {
            diag.error(SIZES, format!("{SIZES} must not contain 0"));
        } else if self.sizes.windows(2).any(|w| w[0] <= w[1]) {
            let mut sorted = self.sizes.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            sorted.dedup();
            diag.error_with_hint(
                SIZES,
                format!("{SIZES} must be strictly descending, got {:?}", self.sizes),
                format!("use {sorted:?}"),
            );
        }

        validate_file_name(&self.prefix, PREFIX, diag);
    }
}

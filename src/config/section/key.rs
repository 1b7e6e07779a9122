//! `[key]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [key]
//! threshold = 240    # R, G and B must all exceed this to become transparent
//! ```

use serde::Deserialize;

/// Near-white keying settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    /// Channel value every one of R, G, B must exceed (exclusive).
    pub threshold: u8,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self { threshold: 240 }
    }
}

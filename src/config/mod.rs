//! Pipeline configuration for `favtrim.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [key], [favicon], [apple]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config file discovery
//! └── mod.rs         # IconConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! source = "public/favicon.jpg"
//! output = "public"
//!
//! [key]
//! threshold = 240
//!
//! [favicon]
//! sizes = [48, 32, 16]
//!
//! [apple]
//! radius_percent = 22
//! ```
//!
//! Every field is optional. Without a config file the defaults above apply.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{AppleConfig, FaviconConfig, KeyConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, GenerateArgs},
    debug, log,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing favtrim.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Absolute path to the config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Source image
    pub source: PathBuf,

    /// Directory receiving every generated PNG
    pub output: PathBuf,

    /// Near-white keying
    pub key: KeyConfig,

    /// Favicon size chain
    pub favicon: FaviconConfig,

    /// Rounded Apple touch icon
    pub apple: AppleConfig,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            source: PathBuf::from("public/favicon.jpg"),
            output: PathBuf::from("public"),
            key: KeyConfig::default(),
            favicon: FaviconConfig::default(),
            apple: AppleConfig::default(),
        }
    }
}

impl IconConfig {
    /// Load configuration for the `generate` command.
    ///
    /// Searches upward from cwd for the config file; falls back to defaults
    /// when none exists. CLI arguments override file values.
    pub fn load(cli: &Cli, args: &GenerateArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => Self::default(),
        };

        // Verbose must be set before the first debug! below
        crate::logger::set_verbose(args.verbose);
        if config.config_path.as_os_str().is_empty() {
            debug!("config"; "{} not found, using defaults", cli.config.display());
        } else {
            debug!("config"; "loaded {}", config.config_path.display());
        }

        let root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.clone());
        config.resolve_paths(&root);
        config.apply_generate_args(args, &cwd);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Absolute path of the source image.
    pub fn source_path(&self) -> &Path {
        &self.source
    }

    /// Absolute path of the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply `generate` arguments. CLI paths are relative to cwd, not the config root.
    fn apply_generate_args(&mut self, args: &GenerateArgs, cwd: &Path) {
        if let Some(source) = &args.source {
            self.source = cwd.join(source);
        }
        if let Some(output) = &args.output {
            self.output = cwd.join(output);
        }
        Self::update_option(&mut self.key.threshold, args.threshold.as_ref());
        Self::update_option(&mut self.apple.radius_percent, args.radius.as_ref());
        if args.no_apple {
            self.apple.enable = false;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve file paths against the config root.
    fn resolve_paths(&mut self, root: &Path) {
        self.source = root.join(&self.source);
        self.output = root.join(&self.output);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.favicon.validate(&mut diag);
        self.apple.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> IconConfig {
    let (parsed, ignored) = IconConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

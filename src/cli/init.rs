//! Configuration file generation.
//!
//! Writes a commented `favtrim.toml` holding the default values.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::IconConfig;
use crate::image::MaskMode;
use crate::log;

/// Write the default config to `path`, or print it when `dry_run` is set.
pub fn init_config(path: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    write_config(path)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// Generate favtrim.toml content with comments
pub fn generate_config_template() -> String {
    let defaults = IconConfig::default();
    let mask = match defaults.apple.mask {
        MaskMode::Replace => "replace",
        MaskMode::Multiply => "multiply",
    };

    let mut out = String::new();
    out.push_str(&format!(
        "# favtrim configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    out.push_str("# Source image and output directory, relative to this file.\n");
    out.push_str(&format!("source = \"{}\"\n", defaults.source.display()));
    out.push_str(&format!("output = \"{}\"\n\n", defaults.output.display()));

    out.push_str("[key]\n");
    out.push_str("# Pixels with R, G and B all above this become transparent.\n");
    out.push_str(&format!("threshold = {}\n\n", defaults.key.threshold));

    out.push_str("[favicon]\n");
    out.push_str("# Largest first; each size shrinks the previous result.\n");
    out.push_str(&format!("sizes = {:?}\n", defaults.favicon.sizes));
    out.push_str(&format!("prefix = \"{}\"\n", defaults.favicon.prefix));
    out.push_str("# Pad non-square content onto a transparent square canvas.\n");
    out.push_str(&format!("square = {}\n\n", defaults.favicon.square));

    out.push_str("[apple]\n");
    out.push_str(&format!("enable = {}\n", defaults.apple.enable));
    out.push_str(&format!("size = {}\n", defaults.apple.size));
    out.push_str("# Corner radius, percent of the shorter side.\n");
    out.push_str(&format!(
        "radius_percent = {}\n",
        defaults.apple.radius_percent
    ));
    out.push_str("# \"replace\" sets alpha to the mask, \"multiply\" keeps transparent padding.\n");
    out.push_str(&format!("mask = \"{mask}\"\n"));
    out.push_str(&format!("filename = \"{}\"\n", defaults.apple.filename));

    out
}

/// Write the default configuration, refusing to overwrite an existing file.
fn write_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("config file '{}' already exists", path.display());
    }

    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

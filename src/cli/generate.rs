//! The `generate` command.

use anyhow::Result;

use crate::cli::{Cli, GenerateArgs};
use crate::config::IconConfig;
use crate::image::{ExportKind, generate};
use crate::logger::{ProgressLine, status_success};
use crate::utils::plural::plural_count;
use crate::{debug, log};

/// Load config, run the pipeline and report what was written.
pub fn generate_icons(cli: &Cli, args: &GenerateArgs) -> Result<()> {
    let config = IconConfig::load(cli, args)?;
    log!("export"; "{} -> {}", config.source_path().display(), config.output_dir().display());

    let mut progress = ProgressLine::new(&[
        (ExportKind::Favicon.label(), config.favicon.sizes.len()),
        (ExportKind::AppleTouch.label(), usize::from(config.apple.enable)),
    ]);
    let report = generate(&config, |exported| progress.inc(exported.kind.label()))?;
    progress.finish();

    debug!("key"; "{} pixels above {} made transparent", report.keyed, config.key.threshold);
    debug!("crop"; "{}x{} -> {}x{}", report.source.0, report.source.1, report.cropped.0, report.cropped.1);
    for file in &report.files {
        debug!("export"; "{} ({}x{})", file.path.display(), file.width, file.height);
    }

    status_success(&format!(
        "generated {} with transparent background in {}",
        plural_count(report.files.len(), "icon"),
        config.output_dir().display()
    ));
    Ok(())
}

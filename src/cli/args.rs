//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Favicon generator: key out white, crop, resize, round
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: favtrim.toml)
    #[arg(short = 'C', long, global = true, default_value = "favtrim.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate favicon PNGs and the Apple touch icon
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Write a default config file to the current directory
    #[command(visible_alias = "i")]
    Init {
        /// Print the config instead of writing it
        #[arg(long)]
        dry: bool,
    },
}

/// Arguments for the generate command. Each one overrides the config file.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Source image (relative to current directory)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub source: Option<PathBuf>,

    /// Output directory (relative to current directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Pixels with R, G and B all above this become transparent
    #[arg(short, long)]
    pub threshold: Option<u8>,

    /// Apple touch icon corner radius, percent of the shorter side
    #[arg(short, long)]
    pub radius: Option<u32>,

    /// Skip the Apple touch icon
    #[arg(long)]
    pub no_apple: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_args() {
        let cli = Cli::try_parse_from([
            "favtrim", "g", "-s", "logo.jpg", "-o", "dist", "-t", "230", "-r", "30", "--no-apple",
        ])
        .unwrap();

        let Commands::Generate { args } = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.source, Some(PathBuf::from("logo.jpg")));
        assert_eq!(args.output, Some(PathBuf::from("dist")));
        assert_eq!(args.threshold, Some(230));
        assert_eq!(args.radius, Some(30));
        assert!(args.no_apple);
        assert!(!args.verbose);
        assert_eq!(cli.config, PathBuf::from("favtrim.toml"));
    }

    #[test]
    fn test_parse_rejects_threshold_overflow() {
        assert!(Cli::try_parse_from(["favtrim", "generate", "-t", "256"]).is_err());
    }

    #[test]
    fn test_parse_init_with_config() {
        let cli = Cli::try_parse_from(["favtrim", "init", "--dry", "-C", "icons.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::Init { dry: true }));
        assert_eq!(cli.config, PathBuf::from("icons.toml"));
    }
}

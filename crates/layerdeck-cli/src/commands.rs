//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Layerdeck: turn layered images into slide animations
#[derive(Parser, Debug)]
#[command(name = "layerdeck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build slide manifests for an image
    Build(BuildArgs),

    /// Check an animation against an image without writing anything
    Check(CheckArgs),

    /// Show the layer tree of an image
    Tree(TreeArgs),

    /// Print an animation file after comment stripping and brace expansion
    Expand(ExpandArgs),
}

/// Arguments for the build command
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Layer hierarchy of the image (YAML or JSON)
    pub image: PathBuf,

    /// Animation file (defaults to the image path with an `.anim` extension)
    #[arg(short, long)]
    pub anim: Option<PathBuf>,

    /// Directory receiving one manifest per animation block
    #[arg(short, long, default_value = "target/layerdeck")]
    pub output: PathBuf,

    /// Summary format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Extension of the merged document named in each manifest
    #[arg(long, default_value = "pdf")]
    pub extension: String,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Layer hierarchy of the image (YAML or JSON)
    pub image: PathBuf,

    /// Animation file (defaults to the image path with an `.anim` extension)
    #[arg(short, long)]
    pub anim: Option<PathBuf>,
}

/// Arguments for the tree command
#[derive(Parser, Debug)]
pub struct TreeArgs {
    /// Layer hierarchy of the image (YAML or JSON)
    pub image: PathBuf,
}

/// Arguments for the expand command
#[derive(Parser, Debug)]
pub struct ExpandArgs {
    /// Animation file
    pub anim: PathBuf,
}

/// Output format for summaries
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

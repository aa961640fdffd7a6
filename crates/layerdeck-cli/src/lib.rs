//! Layerdeck CLI library
//!
//! Command-line front end for the `layerdeck` crate: load a layer
//! hierarchy, run its animation and write slide manifests.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{
    BuildArgs, CheckArgs, Cli, ColorArg, Commands, ExpandArgs, OutputFormat, TreeArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::Reporter;

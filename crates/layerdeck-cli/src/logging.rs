//! Log output for the CLI.
//!
//! Library events go through `tracing`; the CLI routes them to stderr with
//! a level derived from `-q`/`-v`. `RUST_LOG` takes precedence when set.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

/// Build the filter for a configuration, honouring `RUST_LOG` first
#[must_use]
pub fn env_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.log_directive()))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(config: &CliConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_ansi(config.color.should_color())
        .with_target(false)
        .try_init();
}

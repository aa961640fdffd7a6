//! Layerdeck CLI: turn layered images into slide animations
//!
//! ## Usage
//!
//! ```bash
//! layerdeck tree talk.yaml              # Show the layer tree
//! layerdeck expand talk.anim            # Print the preprocessed animation
//! layerdeck check talk.yaml             # Interpret without writing
//! layerdeck build talk.yaml -o slides/  # Write one manifest per block
//! ```

use clap::Parser;
use layerdeck_cli::{
    handlers, logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Reporter, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init(&config);
    let reporter = config.reporter();

    match run(cli.command, &reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.failure(&format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, reporter: &Reporter) -> CliResult<()> {
    match command {
        Commands::Build(args) => {
            let summary = handlers::execute_build(&args)?;
            if summary.animation.is_none() {
                reporter.info("no animation file, revealing top-level layers in order");
            }
            print!("{}", handlers::format_build_summary(&summary, args.format)?);
            reporter.success(&format!("wrote {} manifests", summary.written.len()));
        }
        Commands::Check(args) => {
            let report = handlers::execute_check(&args)?;
            println!("{report}");
            reporter.success("animation is valid");
        }
        Commands::Tree(args) => print!("{}", handlers::execute_tree(&args)?),
        Commands::Expand(args) => print!("{}", handlers::execute_expand(&args)?),
    }
    Ok(())
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();
    CliConfig::new().with_verbosity(verbosity).with_color(color)
}

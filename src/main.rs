//! page-assets - resolve the assets of a server-rendered page.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use page_assets::AssetError;
use page_assets::cli::{Cli, Commands, check::run_check, resolve::run_resolve};
use page_assets::config::EngineConfig;
use page_assets::logger;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = EngineConfig::load(cli)?;

    match &cli.command {
        Commands::Resolve { args } => run_resolve(args, &config),
        Commands::Check { path } => run_check(path.as_deref(), &config),
    }
}

/// Usage errors are meant for the user and print verbatim. Everything else
/// gets its context chain.
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<AssetError>() {
        Some(usage) if usage.is_usage() => logger::status_error(&usage.to_string(), ""),
        _ => {
            let detail = err
                .chain()
                .skip(1)
                .map(|cause| format!("  caused by: {cause}"))
                .collect::<Vec<_>>()
                .join("\n");
            logger::status_error(&err.to_string(), &detail);
        }
    }
}

//! member-order CLI binary entry point.
//! Resolves configuration, delegates to lint/format, and prints results.

use anyhow::Context;
use clap::Parser;
use member_order::cli::{Cli, Commands};
use member_order::config::{resolve_effective, Effective, Overrides};
use member_order::error::Error;
use member_order::{format, lint, output};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", output::error_prefix(), e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Error> {
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Lint { common } => {
            let eff = setup(&common.overrides())?;
            let result = lint::run_lint(&eff)?;
            output::print_lint(&result, &eff.output).context("render lint output")?;
            if result.summary.errors > 0 {
                return Ok(ExitCode::from(1));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Format {
            common,
            write,
            diff,
            check,
        } => {
            let overrides = Overrides {
                write: write.then_some(true),
                diff: diff.then_some(true),
                check: check.then_some(true),
                ..common.overrides()
            };
            let eff = setup(&overrides)?;
            let results = format::run_format(&eff)?;
            output::print_format(&results, &eff.output, eff.diff).context("render format output")?;
            // In check mode, exit non-zero when any source would change
            if eff.check && results.iter().any(|r| r.changed) {
                return Ok(ExitCode::from(1));
            }
            if results.iter().any(|r| r.error.is_some()) {
                return Ok(ExitCode::from(1));
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Resolve configuration, rejecting an invalid order before any document is
/// read, then install the trace subscriber.
fn setup(overrides: &Overrides) -> Result<Effective, Error> {
    let eff = resolve_effective(overrides)?;
    init_tracing(eff.logging);
    if !eff.config_found && eff.output != "json" {
        eprintln!(
            "{} No member-order.toml found; using defaults.",
            output::note_prefix()
        );
    }
    Ok(eff)
}

/// `RUST_LOG` wins; otherwise `logging` selects debug traces for this crate.
fn init_tracing(logging: bool) {
    let default = if logging {
        "member_order=debug"
    } else {
        "member_order=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

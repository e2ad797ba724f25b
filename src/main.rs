//! CLI entry point for lectern.

mod cli;
mod commands;
mod error;
mod upload;

use crate::cli::{Args, Command};
use crate::error::{ErrorKind, Result};
use clap::Parser;
use exn::ResultExt;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse before installing the subscriber so --help prints without logs.
    let args = Args::parse();

    // Priority: RUST_LOG > quiet flag > verbose flag > default (warn).
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    tracing::debug!(?args, "CLI arguments parsed");

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("{err:?}");
            let class = if err.is_user_error() { "error" } else { "internal error" };
            eprintln!("{class}: {}", *err);
            ExitCode::from(err.exit_code())
        },
    }
}

fn run(args: Args) -> Result<()> {
    let stdout = std::io::stdout();
    match args.command {
        Command::Generate(generate) => {
            let config = commands::load_config(args.config.as_deref())?;
            let report = commands::generate(&generate, &config)?;
            if !args.quiet {
                report.write_to(&mut stdout.lock()).or_raise(|| ErrorKind::Output)?;
            }
        },
        Command::Inspect(inspect) => {
            let config = commands::load_config(args.config.as_deref())?;
            commands::inspect(&inspect, &config, &mut stdout.lock())?;
        },
        Command::Format => {
            stdout.lock().write_all(commands::FORMAT_HELP.as_bytes()).or_raise(|| ErrorKind::Output)?;
        },
    }
    Ok(())
}

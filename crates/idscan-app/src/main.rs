// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// idscan — Aadhaar number checker.
//
// Entry point. Loads settings, initialises logging, and runs the requested
// subcommand. Exit codes: 0 all numbers valid, 1 some number invalid,
// 2 usage or configuration problem.

mod cli;
mod report;

use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use idscan_core::AppConfig;
use idscan_core::error::{IdScanError, Result};
use idscan_core::human_errors::humanize_error;
use idscan_validator::AadhaarNumber;

use cli::{CheckArgs, Cli, Command, GenerateArgs};
use report::{Outcome, ReportStyle};

const EXIT_INVALID: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match AppConfig::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                print_error(&e);
                return ExitCode::from(EXIT_USAGE);
            }
        },
        None => AppConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::debug!(config = ?cli.config, "idscan starting");

    let outcome = match cli.cmd {
        Command::Check(args) => run_check(args, &config),
        Command::Generate(args) => run_generate(args),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            print_error(&e);
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn run_check(args: CheckArgs, config: &AppConfig) -> Result<ExitCode> {
    let candidates = if args.numbers.is_empty() {
        read_stdin_candidates()?
    } else {
        args.numbers
    };

    if candidates.is_empty() {
        eprintln!("idscan: no numbers to check");
        return Ok(ExitCode::from(EXIT_USAGE));
    }

    let style = ReportStyle {
        reveal: args.reveal || !config.mask_output,
        explain: args.explain || config.explain_rejections,
        json: args.json,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut invalid = 0usize;
    for candidate in &candidates {
        let outcome = Outcome::check(candidate, style.reveal);
        if !outcome.is_valid() {
            invalid += 1;
        }
        writeln!(out, "{}", outcome.render(style)?)?;
    }
    out.flush()?;

    tracing::info!(checked = candidates.len(), invalid, "check finished");

    Ok(if invalid == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID)
    })
}

fn run_generate(args: GenerateArgs) -> Result<ExitCode> {
    let number = AadhaarNumber::from_payload(&args.payload)?;
    println!("{}", number.as_str());
    Ok(ExitCode::SUCCESS)
}

/// One candidate per non-blank line.
fn read_stdin_candidates() -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut candidates = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            candidates.push(line);
        }
    }
    Ok(candidates)
}

fn print_error(err: &IdScanError) {
    let human = humanize_error(err);
    eprintln!("idscan: {}", human.message);
    eprintln!("  {}", human.suggestion);
}

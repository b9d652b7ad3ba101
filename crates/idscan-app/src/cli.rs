// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "idscan",
    version,
    about = "Check Aadhaar identity numbers (12 digits, Verhoeff check digit)"
)]
pub struct Cli {
    /// JSON settings file.
    #[arg(long, global = true, env = "IDSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check numbers given as arguments, or one per line on stdin
    Check(CheckArgs),
    /// Complete an 11-digit payload with its check digit
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Numbers to check. Quote numbers that contain spaces.
    pub numbers: Vec<String>,

    /// Show full numbers instead of masking all but the last four digits
    #[arg(long)]
    pub reveal: bool,

    /// Say why each rejected number was rejected
    #[arg(long)]
    pub explain: bool,

    /// One JSON object per line instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// First 11 digits of the number
    pub payload: String,
}

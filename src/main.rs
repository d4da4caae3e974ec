// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// cardmask: mask Luhn-valid card numbers from stdin to stdout
//
// Options:
//   --config FILE   JSON configuration (mask_char, separators, min_length,
//                   max_length, max_run_length)
//   --mask C        override the mask character
//   --stats         print match counters as JSON to stderr when done
//
// Logging goes to stderr, filtered by CARDMASK_LOG (default: warn).

use std::env;
use std::io::{self, BufWriter, Read, Write};
use std::process::ExitCode;

use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use cardmask::luhn_filter::{mask_stream, FilterError, MaskConfig, MaskStats, MaskingEngine};

const HELP: &str = "\
Usage: cardmask [OPTIONS] < input > output

Replace the digits of Luhn-valid card numbers read from stdin with a mask
character. All other bytes are copied unchanged.

Options:
  -c, --config FILE  Load JSON configuration from FILE
  -m, --mask C       Mask character (default: X)
  -s, --stats        Print match counters as JSON to stderr
  -h, --help         Show this help
  -V, --version      Show version
";

#[derive(Debug, Default, PartialEq, Eq)]
struct CliOptions {
    config_path: Option<String>,
    mask: Option<char>,
    stats: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(CliOptions),
    Help,
    Version,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-s" | "--stats" => options.stats = true,
            "-c" | "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| format!("option '{}' requires a value", arg))?;
                options.config_path = Some(path.clone());
            }
            "-m" | "--mask" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("option '{}' requires a value", arg))?;
                options.mask = Some(parse_mask(value)?);
            }
            other => {
                if let Some(path) = other.strip_prefix("--config=") {
                    options.config_path = Some(path.to_string());
                } else if let Some(value) = other.strip_prefix("--mask=") {
                    options.mask = Some(parse_mask(value)?);
                } else {
                    return Err(format!("unknown option: {}", other));
                }
            }
        }
    }

    Ok(Command::Run(options))
}

fn parse_mask(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("mask must be a single character, got '{}'", value)),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("CARDMASK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_config(options: &CliOptions) -> Result<MaskConfig, FilterError> {
    let mut config = match &options.config_path {
        Some(path) => MaskConfig::from_json_file(path)?,
        None => MaskConfig::default(),
    };
    if let Some(mask) = options.mask {
        config.mask_char = mask;
    }
    Ok(config)
}

fn run<R: Read, W: Write>(
    options: &CliOptions,
    input: R,
    output: W,
) -> Result<MaskStats, FilterError> {
    let mut engine = MaskingEngine::new(build_config(options)?)?;
    let stats = mask_stream(&mut engine, input, output)?;

    if options.stats {
        match serde_json::to_string(&stats) {
            Ok(json) => eprintln!("{}", json),
            Err(e) => warn!("could not serialize stats: {}", e),
        }
    }

    Ok(stats)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print!("{}", HELP);
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("cardmask {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("cardmask: {}", msg);
            eprintln!("Try 'cardmask --help' for more information.");
            return ExitCode::from(2);
        }
    };

    init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&options, stdin.lock(), BufWriter::new(stdout.lock())) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

mod decode;
mod info;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::LevelFilter;
use opal_elog::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Decode OPAL platform error-event logs.")]
struct Cli {
    /// Sets the verbosity of the logging messages
    /// -v: Warning, -vv: Info, -vvv: Debug, -vvvv: Trace
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbosity: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode an event log into JSON
    Decode { input_file: PathBuf },
    /// List the sections stored in the input files
    Info { input_files: Vec<PathBuf> },
}

impl Command {
    fn run(&self) -> Result<(), Error> {
        match self {
            Command::Decode { input_file } => {
                decode::decode(input_file, std::io::stdout().lock())?
            }
            Command::Info { input_files } => {
                for input_file in input_files {
                    if input_files.len() > 1 {
                        println!("\n{}:\n", input_file.display());
                    }
                    if let Err(err) = info::info(input_file) {
                        log::error!("Error: {err}")
                    }
                }
            }
        }
        Ok(())
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level.to_string())).init();

    if let Err(err) = cli.command.run() {
        log::error!("Fatal Error: {err}");
    }
}

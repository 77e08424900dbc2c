//! Tetra CLI — decode, check, and run base-4 stack programs.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input or parse error
//! - 2: Usage error
//! - 3: Runtime error

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tetra_cli::commands;

#[derive(Parser, Debug)]
#[command(name = "tetra", version)]
#[command(about = "Interpreter for the Tetra base-4 stack language")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode and execute a program
    Run {
        /// Path to a Tetra source file
        file: PathBuf,
    },
    /// Decode a program without running it
    Check {
        /// Path to a Tetra source file
        file: PathBuf,
    },
    /// Print the canonical encoding of a program
    Disassemble {
        /// Path to a Tetra source file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Run { file } => commands::run(file),
        Command::Check { file } => commands::check(file),
        Command::Disassemble { file } => commands::disassemble(file),
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

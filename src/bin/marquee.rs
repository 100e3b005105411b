//! Marquee CLI binary.

use std::process;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use marquee::cli::args::MarqueeArgs;
use marquee::cli::commands::execute_command;

fn main() {
    // Parse command line arguments using clap
    let args = MarqueeArgs::parse();

    // Map verbosity to a default log filter; RUST_LOG still wins when set.
    let default_filter = match args.verbosity() {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

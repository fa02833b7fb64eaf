//! Structure size probe for the libgphoto2 bindings.
//!
//! With no arguments, compiles the C probe against the installed libgphoto2
//! headers and prints `<TypeName> <size>` for each listed structure, one per
//! line, in type-list order.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use gphoto2_sizes::cli::{self, Cli, Outcome};

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli::run(&cli, &mut out)? {
        Outcome::Ok => Ok(ExitCode::SUCCESS),
        Outcome::LayoutMismatch => Ok(ExitCode::from(1)),
    }
}

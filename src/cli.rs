//! Command line front end: the size probe and its companion commands

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::compare::compare;
use crate::config::ProbeConfig;
use crate::ffi::library_version;
use crate::native::NativeProbe;
use crate::probe::{self, SizeRecord, SizeSource};

#[derive(Parser, Debug)]
#[command(
    name = "gphoto2-sizes",
    version,
    about = "Print libgphoto2 structure sizes as compiled against the installed headers"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Probe config (TOML); defaults to $GPHOTO2_SIZES_CONFIG"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Compile the C probe against the installed headers and print its sizes (default)
    Native,
    /// Print the sizes of the Rust `#[repr(C)]` mirrors
    Rust,
    /// Compare Rust mirror sizes with the native headers
    Check,
    /// Print the generated C probe source
    CSource,
    /// Print the version of the libgphoto2 found at runtime
    LibraryVersion,
}

/// Outcome of a run, mapped to the process exit code by `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    LayoutMismatch,
}

pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<Outcome> {
    match cli.command.unwrap_or(Commands::Native) {
        Commands::CSource => {
            out.write_all(probe::C_SOURCE.as_bytes())?;
            out.flush()?;
            Ok(Outcome::Ok)
        }
        Commands::Native => {
            let config = load_config(cli)?;
            let records = measure(SizeSource::Native, &config)?;
            probe::write_records(out, &records)?;
            Ok(Outcome::Ok)
        }
        Commands::Rust => {
            probe::write_records(out, &probe::rust_records())?;
            Ok(Outcome::Ok)
        }
        Commands::Check => {
            let config = load_config(cli)?;
            match library_version(&config) {
                Ok(version) => log::info!(
                    "Checking against {} {}",
                    config.library,
                    version.first().map(String::as_str).unwrap_or("(unknown version)")
                ),
                Err(e) => log::warn!("Native library version unavailable: {}", e),
            }

            let rust = measure(SizeSource::Rust, &config)?;
            let native = measure(SizeSource::Native, &config)?;
            let report = compare(&rust, &native);
            write!(out, "{}", report)?;
            out.flush()?;

            if report.is_consistent() {
                Ok(Outcome::Ok)
            } else {
                for problem in report.problems() {
                    log::error!("Layout problem: {}", problem);
                }
                Ok(Outcome::LayoutMismatch)
            }
        }
        Commands::LibraryVersion => {
            let config = load_config(cli)?;
            let version = library_version(&config)
                .with_context(|| format!("querying {}", config.library))?;
            for line in version {
                writeln!(out, "{}", line)?;
            }
            out.flush()?;
            Ok(Outcome::Ok)
        }
    }
}

fn load_config(cli: &Cli) -> Result<ProbeConfig> {
    ProbeConfig::load(cli.config.as_deref()).context("loading probe config")
}

fn measure(source: SizeSource, config: &ProbeConfig) -> Result<Vec<SizeRecord>> {
    let records = match source {
        SizeSource::Rust => probe::rust_records(),
        SizeSource::Native => NativeProbe::new(config.clone())
            .run()
            .context("running native size probe")?,
    };
    log::debug!("{} sizes: {:?}", source, records);
    Ok(records)
}

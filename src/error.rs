//! Error type shared by the probes, the layout check and config loading

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config {path}: {reason}")]
    Config {
        path: PathBuf,
        reason: String,
    },

    #[error("Malformed size record on line {line_no}: {line:?}")]
    MalformedLine {
        line_no: usize,
        line: String,
    },

    #[error("C compiler {compiler:?} could not be started: {source}")]
    CompilerUnavailable {
        compiler: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Compiling the native probe failed ({status}):\n{stderr}")]
    CompileFailed {
        status: String,
        stderr: String,
    },

    #[error("Native probe exited with {status}:\n{stderr}")]
    ProbeFailed {
        status: String,
        stderr: String,
    },

    #[error("Failed to load {library}: {reason}")]
    LibraryUnavailable {
        library: String,
        reason: String,
    },

    #[error("Symbol {symbol} not found: {reason}")]
    SymbolMissing {
        symbol: &'static str,
        reason: String,
    },
}

pub type ProbeResult<T> = Result<T, ProbeError>;

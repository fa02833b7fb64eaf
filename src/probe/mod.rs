//! Structure size records and the Rust-side probe
//!
//! Both probes speak the same text format: one `<TypeName> <size>` line per
//! structure, in type-list order.

mod parse;

use std::fmt;
use std::io::{self, Write};

pub use parse::parse_records;

include!(concat!(env!("OUT_DIR"), "/size_table.rs"));

/// C source of the native probe, generated from the same type list
pub const C_SOURCE: &str = include_str!(concat!(env!("OUT_DIR"), "/testsizes.c"));

/// Which side of the FFI boundary a record was measured on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSource {
    Rust,
    Native,
}

impl fmt::Display for SizeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeSource::Rust => write!(f, "rust"),
            SizeSource::Native => write!(f, "native"),
        }
    }
}

/// One structure name paired with its size in bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeRecord {
    pub name: String,
    pub size: usize,
}

impl SizeRecord {
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl fmt::Display for SizeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.size)
    }
}

/// Sizes of the `#[repr(C)]` mirrors, in type-list order
pub fn rust_records() -> Vec<SizeRecord> {
    RUST_SIZES
        .iter()
        .map(|&(name, size)| SizeRecord::new(name, size))
        .collect()
}

pub fn write_records<W: Write>(out: &mut W, records: &[SizeRecord]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", record)?;
    }
    out.flush()
}

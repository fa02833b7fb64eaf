//! Structure size probes for the libgphoto2 bindings
//!
//! The native probe compiles the type list against the installed headers
//! and reports what the C compiler measures. The Rust probe reports
//! `size_of` for the `#[repr(C)]` mirrors in [`ffi::types`]. [`compare`]
//! checks that the bindings agree with the library.

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod ffi;
pub mod native;
pub mod probe;

pub use compare::{compare, LayoutEntry, LayoutReport};
pub use config::ProbeConfig;
pub use error::{ProbeError, ProbeResult};
pub use native::NativeProbe;
pub use probe::{parse_records, rust_records, write_records, SizeRecord, SizeSource};

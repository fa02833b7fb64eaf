//! Probe configuration
//!
//! Loaded from a TOML file given on the command line or through
//! `GPHOTO2_SIZES_CONFIG`. Every key is optional:
//!
//! ```toml
//! compiler = "clang"
//! cflags = ["-m32"]
//! include_dirs = ["/opt/gphoto2/include"]
//! library = "libgphoto2.so.6"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ProbeError, ProbeResult};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "GPHOTO2_SIZES_CONFIG";

/// Library opened when the config does not name one
pub const DEFAULT_LIBRARY: &str = "libgphoto2.so";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeConfig {
    /// C compiler for the native probe. Falls back to `CC`, then `cc`.
    pub compiler: Option<String>,

    /// Extra flags passed before the source file
    pub cflags: Vec<String>,

    /// Added as `-I` search paths
    pub include_dirs: Vec<PathBuf>,

    /// Shared library queried for its version
    pub library: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            compiler: None,
            cflags: Vec::new(),
            include_dirs: Vec::new(),
            library: DEFAULT_LIBRARY.to_string(),
        }
    }
}

impl ProbeConfig {
    pub fn from_toml_str(raw: &str, origin: &Path) -> ProbeResult<Self> {
        toml::from_str(raw).map_err(|e| ProbeError::Config {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> ProbeResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ProbeError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&raw, path)
    }

    /// Explicit path first, then `GPHOTO2_SIZES_CONFIG`, then defaults
    pub fn load(explicit: Option<&Path>) -> ProbeResult<Self> {
        if let Some(path) = explicit {
            log::debug!("Loading probe config from {}", path.display());
            return Self::from_file(path);
        }

        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => {
                log::debug!("Loading probe config from ${}", CONFIG_ENV);
                Self::from_file(PathBuf::from(path))
            }
            _ => Ok(Self::default()),
        }
    }

    /// Compiler to run: config, then `$CC`, then `cc`
    pub fn resolve_compiler(&self) -> String {
        self.compiler
            .clone()
            .filter(|c| !c.trim().is_empty())
            .or_else(|| std::env::var("CC").ok().filter(|c| !c.trim().is_empty()))
            .unwrap_or_else(|| "cc".to_string())
    }
}

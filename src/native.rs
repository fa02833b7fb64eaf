//! Native probe: builds the generated C source against the installed
//! libgphoto2 headers and reads back what the C compiler thinks the
//! structure sizes are.

use std::path::Path;
use std::process::{Command, Output};

use crate::config::ProbeConfig;
use crate::error::{ProbeError, ProbeResult};
use crate::probe::{self, SizeRecord};

const SOURCE_NAME: &str = "testsizes.c";

#[cfg(windows)]
const BINARY_NAME: &str = "testsizes.exe";
#[cfg(not(windows))]
const BINARY_NAME: &str = "testsizes";

pub struct NativeProbe {
    config: ProbeConfig,
}

impl NativeProbe {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Compile and run the C probe in a scratch directory
    pub fn run(&self) -> ProbeResult<Vec<SizeRecord>> {
        let scratch = tempfile::Builder::new().prefix("gphoto2-sizes").tempdir()?;
        let source = scratch.path().join(SOURCE_NAME);
        let binary = scratch.path().join(BINARY_NAME);

        std::fs::write(&source, probe::C_SOURCE)?;
        log::debug!("[NativeProbe] Wrote {}", source.display());

        self.compile(&source, &binary)?;

        log::debug!("[NativeProbe] Running {}", binary.display());
        let output = Command::new(&binary).current_dir(scratch.path()).output()?;
        if !output.status.success() {
            return Err(ProbeError::ProbeFailed {
                status: output.status.to_string(),
                stderr: stderr_of(&output),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let records = probe::parse_records(&stdout)?;
        log::info!("[NativeProbe] Measured {} structures", records.len());
        Ok(records)
    }

    fn compile(&self, source: &Path, binary: &Path) -> ProbeResult<()> {
        let compiler = self.config.resolve_compiler();

        let mut cmd = Command::new(&compiler);
        cmd.args(&self.config.cflags);
        for dir in &self.config.include_dirs {
            cmd.arg(format!("-I{}", dir.display()));
        }
        cmd.arg(source).arg("-o").arg(binary);

        log::debug!("[NativeProbe] Compiling: {:?}", cmd);
        let output = cmd.output().map_err(|source| ProbeError::CompilerUnavailable {
            compiler: compiler.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(ProbeError::CompileFailed {
                status: output.status.to_string(),
                stderr: stderr_of(&output),
            });
        }

        let warnings = stderr_of(&output);
        if !warnings.is_empty() {
            log::warn!("[NativeProbe] {} reported:\n{}", compiler, warnings);
        }
        Ok(())
    }
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim_end().to_string()
}

//! External tool invocation seam

use std::io;
use std::path::Path;
use std::process::Command;

use tracing::debug;

/// Captured result of one external tool invocation
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit code; `None` when the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ToolOutput {
    /// Whether the tool exited with code zero
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Captured stderr as trimmed text
    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim().to_string()
    }
}

/// External tool invocation, abstracted for testability
///
/// Implementations run `program` with `args` inside `workdir` and block
/// until the tool exits. The pipeline only ever talks to tools through
/// this trait, so tests can drive it without TeX or ImageMagick installed.
pub trait ToolRunner {
    /// Run the tool to completion, capturing its output
    fn run(&self, program: &str, args: &[&str], workdir: &Path) -> io::Result<ToolOutput>;
}

/// Real runner over `std::process::Command`
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], workdir: &Path) -> io::Result<ToolOutput> {
        debug!("running {} {:?} in {}", program, args, workdir.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(workdir)
            .output()?;

        Ok(ToolOutput {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

//! Rendering pipeline: write, compile, sweep, relocate
//!
//! The pipeline takes an assembled document and turns it into artifacts on
//! disk by invoking the configured TeX engine, then cleaning up and
//! optionally relocating what is left. Everything is synchronous and runs
//! inside the caller-supplied working directory; concurrent renders against
//! the same directory race.

pub mod cleanup;
pub mod error;
pub mod favicon;
pub mod process;

pub use error::PipelineError;
pub use favicon::FaviconConfig;
pub use process::{SystemRunner, ToolOutput, ToolRunner};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::tex::DocumentConfig;

/// Configuration for one logo render
///
/// Every setting is explicit per call; nothing is shared between renders.
#[derive(Debug, Clone)]
pub struct LogoConfig {
    /// Document assembly options
    pub document: DocumentConfig,

    /// TeX engine to invoke; any engine with a compatible interface works
    pub engine: String,

    /// Extensions deleted from the working directory after compiling
    pub cleanup: Vec<String>,

    /// Optional destination for the surviving artifacts
    ///
    /// Relative paths resolve against `workdir`; the directory is created
    /// if missing.
    pub move_to: Option<PathBuf>,

    /// Directory the render runs in; all intermediates are scoped here
    pub workdir: PathBuf,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            document: DocumentConfig::default(),
            engine: "lualatex".to_string(),
            cleanup: vec!["aux".to_string(), "log".to_string(), "pdf".to_string()],
            move_to: None,
            workdir: PathBuf::from("."),
        }
    }
}

impl LogoConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document assembly options
    pub fn with_document(mut self, document: DocumentConfig) -> Self {
        self.document = document;
        self
    }

    /// Set the TeX engine
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    /// Set the extensions swept after compiling
    pub fn with_cleanup<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cleanup = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Keep every intermediate file
    pub fn without_cleanup(mut self) -> Self {
        self.cleanup = vec![];
        self
    }

    /// Move the surviving artifacts to this directory afterwards
    pub fn with_move_to(mut self, dest: impl Into<PathBuf>) -> Self {
        self.move_to = Some(dest.into());
        self
    }

    /// Set the working directory
    pub fn with_workdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = dir.into();
        self
    }
}

/// The artifacts a render left behind
#[derive(Debug, Clone)]
pub struct RenderedAssets {
    /// Base name the artifacts share
    pub base: String,
    /// Directory the artifacts ended up in
    pub dir: PathBuf,
    /// Sorted paths of the surviving artifacts
    pub files: Vec<PathBuf>,
}

/// Render one document: write it, compile it, sweep, relocate
///
/// A failed compile surfaces as [`PipelineError::EngineFailed`] and leaves
/// whatever artifacts were produced; there is no partial-failure recovery.
pub fn run_logo(
    runner: &dyn ToolRunner,
    base: &str,
    source: &str,
    config: &LogoConfig,
) -> Result<RenderedAssets, PipelineError> {
    write_source(&config.workdir, base, source)?;
    compile(runner, config, base)?;
    cleanup::sweep_extensions(&config.workdir, base, &config.cleanup)?;

    let dir = match &config.move_to {
        Some(dest) => {
            let dest = resolve_dest(&config.workdir, dest);
            cleanup::relocate(&config.workdir, base, &dest)?;
            dest
        }
        None => config.workdir.clone(),
    };

    let files = cleanup::collect_prefixed(&dir, base)?;
    info!("rendered {} artifacts for {}", files.len(), base);

    Ok(RenderedAssets {
        base: base.to_string(),
        dir,
        files,
    })
}

/// Write the document source as `<workdir>/<base>.tex`
fn write_source(workdir: &Path, base: &str, source: &str) -> Result<PathBuf, PipelineError> {
    fs::create_dir_all(workdir)
        .map_err(|e| PipelineError::io(format!("failed to create {}", workdir.display()), e))?;

    let path = workdir.join(format!("{}.tex", base));
    fs::write(&path, source)
        .map_err(|e| PipelineError::io(format!("failed to write {}", path.display()), e))?;

    debug!("wrote {}", path.display());
    Ok(path)
}

/// Compile `<base>.tex` with the configured engine, blocking
///
/// Shell escape is passed exactly when the document requests raster
/// conversion; the conversion runs inside the engine and needs it.
fn compile(runner: &dyn ToolRunner, config: &LogoConfig, base: &str) -> Result<(), PipelineError> {
    let tex_file = format!("{}.tex", base);
    let mut args = vec![];
    if config.document.shell_escape() {
        args.push("--shell-escape");
    }
    args.push(tex_file.as_str());

    let output = runner
        .run(&config.engine, &args, &config.workdir)
        .map_err(|e| PipelineError::spawn(config.engine.clone(), e))?;

    if !output.success() {
        return Err(PipelineError::EngineFailed {
            engine: config.engine.clone(),
            code: output.code,
            stderr: output.stderr_lossy(),
        });
    }
    Ok(())
}

/// Resolve a relocation target against the working directory
fn resolve_dest(workdir: &Path, dest: &Path) -> PathBuf {
    if dest.is_absolute() {
        dest.to_path_buf()
    } else {
        workdir.join(dest)
    }
}

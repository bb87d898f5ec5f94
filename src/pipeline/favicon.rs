//! Favicon derivation
//!
//! A favicon run re-renders the logo under a derived base name, converts
//! the raster into `.ico` files at the requested resolutions, and removes
//! the intermediates so only the icons remain.

use std::path::PathBuf;

use tracing::{debug, info};

use super::cleanup;
use super::error::PipelineError;
use super::process::ToolRunner;
use super::{resolve_dest, run_logo, LogoConfig, RenderedAssets};

/// Suffix appended to the logo base name for favicon renders
pub const FAVICON_SUFFIX: &str = "favicon";

/// Base name for favicon artifacts derived from `name`
pub fn derived_base(name: &str) -> String {
    format!("{}_{}", name, FAVICON_SUFFIX)
}

/// Configuration for favicon derivation
#[derive(Debug, Clone)]
pub struct FaviconConfig {
    /// Base render configuration; its `move_to` applies after conversion
    pub logo: LogoConfig,

    /// Image conversion tool, invoked once per resolution
    pub converter: String,

    /// Remove every intermediate sharing the derived base name afterwards
    pub cleanup: bool,
}

impl Default for FaviconConfig {
    fn default() -> Self {
        Self {
            logo: LogoConfig::default(),
            converter: "convert".to_string(),
            cleanup: true,
        }
    }
}

impl FaviconConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base render configuration
    pub fn with_logo(mut self, logo: LogoConfig) -> Self {
        self.logo = logo;
        self
    }

    /// Set the image conversion tool
    pub fn with_converter(mut self, converter: impl Into<String>) -> Self {
        self.converter = converter.into();
        self
    }

    /// Keep the intermediates instead of sweeping them
    pub fn keep_intermediates(mut self) -> Self {
        self.cleanup = false;
        self
    }
}

/// Derive favicons from an assembled document
///
/// `base` must already carry the favicon suffix and `source` must be the
/// document for the label-free theme; entry points prepare both. The inner
/// render never relocates, so the raster is still in the working directory
/// when the converter reads it. Relocation of the icons happens last.
pub fn run_favicon(
    runner: &dyn ToolRunner,
    base: &str,
    source: &str,
    resolutions: &[u32],
    config: &FaviconConfig,
) -> Result<RenderedAssets, PipelineError> {
    let inner = LogoConfig {
        move_to: None,
        ..config.logo.clone()
    };
    run_logo(runner, base, source, &inner)?;

    convert_icons(runner, base, resolutions, config)?;

    if config.cleanup {
        cleanup::sweep_stem(&config.logo.workdir, base)?;
    }

    let dir = match &config.logo.move_to {
        Some(dest) => {
            let dest = resolve_dest(&config.logo.workdir, dest);
            cleanup::relocate(&config.logo.workdir, base, &dest)?;
            dest
        }
        None => config.logo.workdir.clone(),
    };

    let files = cleanup::collect_prefixed(&dir, base)?;
    info!("derived {} favicon files for {}", files.len(), base);

    Ok(RenderedAssets {
        base: base.to_string(),
        dir,
        files,
    })
}

/// Convert the rendered raster into one `.ico` per resolution
///
/// Each conversion flattens onto a white background, resizes into an
/// `r x r` canvas, drops the alpha channel, and reduces to a 256-color
/// palette. An empty resolution list skips conversion entirely.
fn convert_icons(
    runner: &dyn ToolRunner,
    base: &str,
    resolutions: &[u32],
    config: &FaviconConfig,
) -> Result<Vec<PathBuf>, PipelineError> {
    if resolutions.is_empty() {
        return Ok(vec![]);
    }

    let ext = config
        .logo
        .document
        .convert_to
        .as_deref()
        .ok_or(PipelineError::MissingRaster)?;
    let raster = format!("{}.{}", base, ext);

    let mut icons = vec![];
    for res in resolutions {
        let size = format!("{}x{}", res, res);
        let icon = format!("{}_{}.ico", base, res);
        let args = [
            raster.as_str(),
            "-background",
            "white",
            "-clone",
            "0",
            "-resize",
            &size,
            "-extent",
            &size,
            "-delete",
            "0",
            "-alpha",
            "off",
            "-colors",
            "256",
            &icon,
        ];

        let output = runner
            .run(&config.converter, &args, &config.logo.workdir)
            .map_err(|e| PipelineError::spawn(config.converter.clone(), e))?;

        if !output.success() {
            return Err(PipelineError::ConvertFailed {
                converter: config.converter.clone(),
                code: output.code,
                stderr: output.stderr_lossy(),
            });
        }

        debug!("converted {} at {}", icon, size);
        icons.push(config.logo.workdir.join(icon));
    }

    Ok(icons)
}

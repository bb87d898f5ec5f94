//! mindmap-logo - TeX/TikZ mindmap logo and favicon generation
//!
//! This library assembles a standalone TikZ mindmap document from a
//! [`Theme`], compiles it with an external TeX engine, and optionally
//! derives `.ico` favicons from the rendered raster.
//!
//! Rendering shells out to a TeX engine (`lualatex` by default) and, for
//! favicons, to ImageMagick's `convert`. Both tools must be installed; the
//! [`ToolRunner`] seam exists so tests can run the pipeline without them.
//!
//! # Example
//!
//! ```no_run
//! use mindmap_logo::{render_logo, Theme};
//!
//! let mut theme = Theme::classic_light();
//! theme.root_label = "PySAL".to_string();
//!
//! let assets = render_logo("pysal_logo", &theme).unwrap();
//! println!("rendered {} files", assets.files.len());
//! ```

pub mod pipeline;
pub mod tex;
pub mod theme;

pub use pipeline::{
    FaviconConfig, LogoConfig, PipelineError, RenderedAssets, SystemRunner, ToolOutput, ToolRunner,
};
pub use tex::{build_document, DocumentConfig, TexBuilder, TexError};
pub use theme::{ColorDef, NodeSpec, Theme, ThemeError, BRANCH_COUNT, LEAVES_PER_BRANCH};

use thiserror::Error;

/// Errors that can occur across the full render pipeline
#[derive(Debug, Error)]
pub enum LogoError {
    /// Error loading or parsing a theme
    #[error("theme error: {0}")]
    Theme(#[from] ThemeError),

    /// Error assembling the document
    #[error("template error: {0}")]
    Tex(#[from] TexError),

    /// Error rendering, cleaning up, or relocating
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Render the logo with default configuration
///
/// Writes `<name>.tex` into the current directory, compiles it with
/// `lualatex --shell-escape`, and sweeps the `aux`/`log`/`pdf`
/// intermediates, leaving the source and the rendered raster.
///
/// # Example
///
/// ```no_run
/// use mindmap_logo::{render_logo, Theme};
///
/// let mut theme = Theme::classic_light();
/// theme.root_label = "PySAL".to_string();
/// render_logo("pysal_logo", &theme).unwrap();
/// ```
pub fn render_logo(name: &str, theme: &Theme) -> Result<RenderedAssets, LogoError> {
    render_logo_with_config(name, theme, &LogoConfig::default())
}

/// Render the logo with custom configuration
///
/// # Example
///
/// ```no_run
/// use mindmap_logo::{render_logo_with_config, LogoConfig, Theme};
///
/// let config = LogoConfig::new()
///     .with_workdir("build")
///     .with_move_to("logos");
///
/// render_logo_with_config("pysal_logo", &Theme::classic_dark(), &config).unwrap();
/// ```
pub fn render_logo_with_config(
    name: &str,
    theme: &Theme,
    config: &LogoConfig,
) -> Result<RenderedAssets, LogoError> {
    render_logo_with_runner(name, theme, config, &SystemRunner)
}

/// Render the logo through a caller-supplied tool runner
pub fn render_logo_with_runner(
    name: &str,
    theme: &Theme,
    config: &LogoConfig,
    runner: &dyn ToolRunner,
) -> Result<RenderedAssets, LogoError> {
    let source = build_document(theme, &config.document)?;
    let assets = pipeline::run_logo(runner, name, &source, config)?;
    Ok(assets)
}

/// Derive favicons with default configuration
///
/// Renders the logo under `<name>_favicon` with the root label suppressed,
/// converts the raster into one `.ico` per requested resolution, and
/// removes every intermediate so only the icons remain.
///
/// # Example
///
/// ```no_run
/// use mindmap_logo::{render_favicon, Theme};
///
/// let assets = render_favicon("pysal_logo", &Theme::classic_light(), &[16, 32]).unwrap();
/// assert_eq!(assets.files.len(), 2);
/// ```
pub fn render_favicon(
    name: &str,
    theme: &Theme,
    resolutions: &[u32],
) -> Result<RenderedAssets, LogoError> {
    render_favicon_with_config(name, theme, resolutions, &FaviconConfig::default())
}

/// Derive favicons with custom configuration
pub fn render_favicon_with_config(
    name: &str,
    theme: &Theme,
    resolutions: &[u32],
    config: &FaviconConfig,
) -> Result<RenderedAssets, LogoError> {
    render_favicon_with_runner(name, theme, resolutions, config, &SystemRunner)
}

/// Derive favicons through a caller-supplied tool runner
///
/// The favicon render always suppresses the root label, whatever the
/// theme's `root_label` says.
pub fn render_favicon_with_runner(
    name: &str,
    theme: &Theme,
    resolutions: &[u32],
    config: &FaviconConfig,
    runner: &dyn ToolRunner,
) -> Result<RenderedAssets, LogoError> {
    let base = pipeline::favicon::derived_base(name);

    let mut icon_theme = theme.clone();
    icon_theme.root_label.clear();
    let source = build_document(&icon_theme, &config.logo.document)?;

    let assets = pipeline::favicon::run_favicon(runner, &base, &source, resolutions, config)?;
    Ok(assets)
}

//! End-to-end pipeline tests
//!
//! A scripted runner fabricates the artifacts the real tools would leave
//! behind, so the full write/compile/sweep/relocate flow runs without TeX
//! or ImageMagick installed.

use std::fs;
use std::io;
use std::path::Path;

use tempfile::TempDir;

use mindmap_logo::{
    render_favicon_with_runner, render_logo_with_runner, FaviconConfig, LogoConfig, LogoError,
    PipelineError, SystemRunner, Theme, ToolOutput, ToolRunner,
};

/// Fabricates the artifacts the real tools would leave behind
struct ScriptedRunner;

impl ToolRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str], workdir: &Path) -> io::Result<ToolOutput> {
        if program == "convert" {
            let icon = args.last().expect("convert needs a target");
            fs::write(workdir.join(icon), b"ico")?;
        } else {
            let tex = args.last().expect("engine needs a source");
            let base = tex.trim_end_matches(".tex");
            for ext in ["aux", "log", "pdf", "png"] {
                fs::write(workdir.join(format!("{}.{}", base, ext)), b"x")?;
            }
        }
        Ok(ToolOutput {
            code: Some(0),
            stdout: vec![],
            stderr: vec![],
        })
    }
}

/// Always fails like a broken TeX installation
struct FailingEngine;

impl ToolRunner for FailingEngine {
    fn run(&self, _program: &str, _args: &[&str], _workdir: &Path) -> io::Result<ToolOutput> {
        Ok(ToolOutput {
            code: Some(1),
            stdout: vec![],
            stderr: b"! LaTeX Error: File `standalone.cls' not found.".to_vec(),
        })
    }
}

fn labeled_theme() -> Theme {
    let mut theme = Theme::classic_light();
    theme.root_label = "PySAL".to_string();
    theme
}

fn names_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .expect("Should read dir")
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_logo_end_to_end() {
    let temp = TempDir::new().unwrap();
    let config = LogoConfig::new().with_workdir(temp.path());

    let assets =
        render_logo_with_runner("pysal_logo", &labeled_theme(), &config, &ScriptedRunner).unwrap();

    // aux/log/pdf swept; source and raster survive
    assert_eq!(names_in(temp.path()), vec!["pysal_logo.png", "pysal_logo.tex"]);
    assert_eq!(assets.base, "pysal_logo");
    assert_eq!(assets.files.len(), 2);
}

#[test]
fn test_logo_keeps_intermediates_without_cleanup() {
    let temp = TempDir::new().unwrap();
    let config = LogoConfig::new()
        .with_workdir(temp.path())
        .without_cleanup();

    render_logo_with_runner("pysal_logo", &labeled_theme(), &config, &ScriptedRunner).unwrap();

    assert_eq!(
        names_in(temp.path()),
        vec![
            "pysal_logo.aux",
            "pysal_logo.log",
            "pysal_logo.pdf",
            "pysal_logo.png",
            "pysal_logo.tex",
        ]
    );
}

#[test]
fn test_logo_relocates_survivors() {
    let temp = TempDir::new().unwrap();
    let config = LogoConfig::new()
        .with_workdir(temp.path())
        .with_move_to("out");

    let assets =
        render_logo_with_runner("pysal_logo", &labeled_theme(), &config, &ScriptedRunner).unwrap();

    let dest = temp.path().join("out");
    assert_eq!(assets.dir, dest);
    assert_eq!(names_in(&dest), vec!["pysal_logo.png", "pysal_logo.tex"]);
    assert!(names_in(temp.path()).is_empty());
}

#[test]
fn test_favicon_end_to_end() {
    let temp = TempDir::new().unwrap();
    let config = FaviconConfig::new().with_logo(LogoConfig::new().with_workdir(temp.path()));

    let assets = render_favicon_with_runner(
        "pysal_logo",
        &labeled_theme(),
        &[32],
        &config,
        &ScriptedRunner,
    )
    .unwrap();

    // every intermediate swept; only the icon remains
    assert_eq!(names_in(temp.path()), vec!["pysal_logo_favicon_32.ico"]);
    assert_eq!(assets.base, "pysal_logo_favicon");
    assert_eq!(assets.files.len(), 1);
}

#[test]
fn test_favicon_multiple_resolutions() {
    let temp = TempDir::new().unwrap();
    let config = FaviconConfig::new().with_logo(LogoConfig::new().with_workdir(temp.path()));

    let assets = render_favicon_with_runner(
        "pysal_logo",
        &labeled_theme(),
        &[16, 32, 64],
        &config,
        &ScriptedRunner,
    )
    .unwrap();

    assert_eq!(
        names_in(temp.path()),
        vec![
            "pysal_logo_favicon_16.ico",
            "pysal_logo_favicon_32.ico",
            "pysal_logo_favicon_64.ico",
        ]
    );
    assert_eq!(assets.files.len(), 3);
}

#[test]
fn test_favicon_empty_resolutions_leaves_nothing() {
    let temp = TempDir::new().unwrap();
    let config = FaviconConfig::new().with_logo(LogoConfig::new().with_workdir(temp.path()));

    let assets = render_favicon_with_runner(
        "pysal_logo",
        &labeled_theme(),
        &[],
        &config,
        &ScriptedRunner,
    )
    .unwrap();

    // no conversion happened and cleanup swept the intermediates
    assert!(assets.files.is_empty());
    assert!(names_in(temp.path()).is_empty());
}

#[test]
fn test_favicon_relocates_after_conversion() {
    let temp = TempDir::new().unwrap();
    let config = FaviconConfig::new().with_logo(
        LogoConfig::new()
            .with_workdir(temp.path())
            .with_move_to("icons"),
    );

    let assets = render_favicon_with_runner(
        "pysal_logo",
        &labeled_theme(),
        &[32],
        &config,
        &ScriptedRunner,
    )
    .unwrap();

    let dest = temp.path().join("icons");
    assert_eq!(assets.dir, dest);
    assert_eq!(names_in(&dest), vec!["pysal_logo_favicon_32.ico"]);
    assert!(names_in(temp.path()).is_empty());
}

#[test]
fn test_engine_failure_surfaces() {
    let temp = TempDir::new().unwrap();
    let config = LogoConfig::new().with_workdir(temp.path());

    let err = render_logo_with_runner("pysal_logo", &labeled_theme(), &config, &FailingEngine)
        .unwrap_err();

    match err {
        LogoError::Pipeline(PipelineError::EngineFailed {
            engine,
            code,
            stderr,
        }) => {
            assert_eq!(engine, "lualatex");
            assert_eq!(code, Some(1));
            assert!(stderr.contains("standalone.cls"));
        }
        other => panic!("Expected EngineFailed, got {:?}", other),
    }
}

#[test]
fn test_missing_engine_is_spawn_error() {
    let temp = TempDir::new().unwrap();
    let config = LogoConfig::new()
        .with_workdir(temp.path())
        .with_engine("missing-tex-engine-xyzzy");

    let err = render_logo_with_runner("pysal_logo", &labeled_theme(), &config, &SystemRunner)
        .unwrap_err();

    assert!(matches!(
        err,
        LogoError::Pipeline(PipelineError::Spawn { .. })
    ));
}

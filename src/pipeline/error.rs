//! Error types for the rendering pipeline

use std::io;

use thiserror::Error;

/// Errors that can occur while rendering, cleaning up, or relocating
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A filesystem operation failed
    #[error("{context}: {source}")]
    Io { context: String, source: io::Error },

    /// The external tool could not be started at all
    #[error("failed to start {program}: {source}")]
    Spawn { program: String, source: io::Error },

    /// The TeX engine ran but exited unsuccessfully
    #[error("{engine} failed{}: {stderr}", exit_label(.code))]
    EngineFailed {
        engine: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The image converter ran but exited unsuccessfully
    #[error("{converter} failed{}: {stderr}", exit_label(.code))]
    ConvertFailed {
        converter: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Favicon derivation needs a raster, but conversion is disabled
    #[error("favicon derivation requires raster conversion, but the document disables it")]
    MissingRaster,
}

impl PipelineError {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn spawn(program: impl Into<String>, source: io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}

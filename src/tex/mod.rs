//! TeX document assembly for the mindmap logo
//!
//! This module turns a [`Theme`](crate::theme::Theme) into a complete
//! standalone TikZ document string. Assembly is pure string building;
//! nothing here touches the filesystem or runs a compiler.

pub mod builder;
pub mod config;

pub use builder::{build_document, TexBuilder, TexError};
pub use config::DocumentConfig;

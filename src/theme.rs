//! Theme system for the mindmap logo
//!
//! A theme bundles everything that gives one render its visual identity:
//! the seven branch descriptors (color + label), the background/concept/text
//! colors, the root label with its font options, and the document font.
//! Themes are plain data resolved once per render; nothing in here touches
//! the filesystem except the TOML loaders.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Number of branch nodes every logo carries.
pub const BRANCH_COUNT: usize = 7;

/// Number of empty leaf nodes ringing each branch.
pub const LEAVES_PER_BRANCH: usize = 9;

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A named color definition
///
/// `value` is the body of the TeX `\definecolor` call and is interpreted by
/// the theme's color model (for `RGB`, a `"r, g, b"` triple). The value is
/// passed through verbatim; no validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColorDef {
    /// Color name referenced from the document
    pub name: String,
    /// Color components in the theme's color model
    pub value: String,
}

impl ColorDef {
    /// Create a new color definition
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Node descriptor: one branch of the mindmap
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeSpec {
    /// Branch color; the concept color transitions into it from the root
    pub color: ColorDef,
    /// Label text inside the branch node (empty renders a bare circle)
    #[serde(default)]
    pub label: String,
}

impl NodeSpec {
    /// Create a new node descriptor
    pub fn new(color: ColorDef, label: impl Into<String>) -> Self {
        Self {
            color,
            label: label.into(),
        }
    }
}

fn default_color_model() -> String {
    "RGB".to_string()
}

fn default_root_font_style() -> String {
    "bfseries".to_string()
}

fn default_root_font_size() -> String {
    "large".to_string()
}

fn default_font() -> String {
    "M+ 1mn".to_string()
}

/// The full visual configuration for one logo render
///
/// Immutable once handed to the pipeline. The only structural requirement is
/// that `nodes` holds exactly [`BRANCH_COUNT`] descriptors, checked at
/// document assembly time.
#[derive(Debug, Clone, Deserialize)]
pub struct Theme {
    /// Optional name for the theme
    #[serde(default)]
    pub name: Option<String>,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Branch descriptors in drawing order
    pub nodes: Vec<NodeSpec>,
    /// TeX color model the color values are written in
    #[serde(default = "default_color_model")]
    pub color_model: String,
    /// Background rectangle color
    pub background: ColorDef,
    /// Root concept color; transitions into each branch color
    pub concept: ColorDef,
    /// Text color inside the root node
    pub text: ColorDef,
    /// Text inside the root node (empty suppresses in-image text)
    #[serde(default)]
    pub root_label: String,
    /// TeX font style command name for the root label, e.g. `bfseries`
    #[serde(default = "default_root_font_style")]
    pub root_font_style: String,
    /// TeX font size command name for the root label, e.g. `large`
    #[serde(default = "default_root_font_size")]
    pub root_font_size: String,
    /// Main document font, set via `fontspec`
    #[serde(default = "default_font")]
    pub font: String,
}

/// Built-in light preset: saturated branches on a white background
const CLASSIC_LIGHT: &str = r#"
name = "Classic light"
description = "Seven saturated branches on a white background"
color_model = "RGB"
font = "M+ 1mn"

background = { name = "paper", value = "255, 255, 255" }
concept = { name = "cloud", value = "244, 244, 244" }
text = { name = "slate", value = "85, 85, 85" }

[[nodes]]
color = { name = "crimson", value = "214, 26, 44" }

[[nodes]]
color = { name = "ember", value = "240, 109, 40" }

[[nodes]]
color = { name = "gold", value = "247, 179, 43" }

[[nodes]]
color = { name = "leaf", value = "84, 158, 57" }

[[nodes]]
color = { name = "lagoon", value = "23, 133, 130" }

[[nodes]]
color = { name = "cobalt", value = "43, 87, 151" }

[[nodes]]
color = { name = "violet", value = "125, 73, 154" }
"#;

/// Built-in dark preset: lifted branch colors on a near-black background
const CLASSIC_DARK: &str = r#"
name = "Classic dark"
description = "Lifted branch colors on a near-black background"
color_model = "RGB"
font = "M+ 1mn"

background = { name = "ink", value = "24, 26, 31" }
concept = { name = "charcoal", value = "44, 47, 54" }
text = { name = "fog", value = "220, 222, 226" }

[[nodes]]
color = { name = "crimson", value = "232, 71, 85" }

[[nodes]]
color = { name = "ember", value = "247, 135, 61" }

[[nodes]]
color = { name = "gold", value = "250, 197, 75" }

[[nodes]]
color = { name = "leaf", value = "119, 183, 90" }

[[nodes]]
color = { name = "lagoon", value = "54, 166, 162" }

[[nodes]]
color = { name = "cobalt", value = "84, 133, 198" }

[[nodes]]
color = { name = "violet", value = "158, 110, 186" }
"#;

impl Theme {
    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a theme from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(content)?)
    }

    /// The built-in light preset
    pub fn classic_light() -> Self {
        Self::from_str(CLASSIC_LIGHT).expect("Classic light preset should be valid TOML")
    }

    /// The built-in dark preset
    pub fn classic_dark() -> Self {
        Self::from_str(CLASSIC_DARK).expect("Classic dark preset should be valid TOML")
    }

    /// Every color the document must define, in declaration order
    ///
    /// Branch colors come first in caller-supplied order, then background,
    /// concept, and text. This order is observable in the generated document.
    pub fn defined_colors(&self) -> impl Iterator<Item = &ColorDef> {
        self.nodes
            .iter()
            .map(|node| &node.color)
            .chain([&self.background, &self.concept, &self.text])
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic_light()
    }
}
